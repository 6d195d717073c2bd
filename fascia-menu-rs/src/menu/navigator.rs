use super::descriptor::{CatalogId, MenuSet, ParamDescriptor, Submenu, Target, ValueDisplay};
use super::error::ConfigError;
use super::frame::DisplayFrame;
use super::store::{ParamStore, StoreError};
use super::{FIELD_WIDTH, MAX_MENUS_PER_CATALOG, PAGE_WIDTH};

/// Display rows, top to bottom.
const MENU_ROW: usize = 0;
const MESSAGE_ROW: usize = 1;
const LABEL_ROW: usize = 2;
const VALUE_ROW: usize = 3;

/// One discrete panel action, as produced by the input scan task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Menu encoder, one detent clockwise.
    RotateCw,
    /// Menu encoder, one detent counter-clockwise.
    RotateCcw,
    /// Menu encoder switch, short press.
    Click,
    /// Catalog button: toggle between the main and extra menu sets.
    CatalogSwitch,
    /// Menu encoder switch held down: step out of the current level.
    Back,
    /// One of the four direct-adjust encoders under the display moved.
    FieldAdjust { field: usize, delta: i32 },
}

/// An [`InputEvent`] stamped with the monotonic time it happened, so
/// double-click detection does not depend on queueing latency.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedEvent {
    pub event: InputEvent,
    /// Milliseconds from an arbitrary monotonic origin.
    pub at_ms: u64,
}

/// Navigation state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavMode {
    /// Choosing a top menu inside the active catalog.
    TopMenuSelect,
    /// Browsing one submenu a page at a time.
    SubmenuPage,
    /// Adjusting one field's value with the menu encoder.
    ParameterEdit,
}

/// Timing knobs for the navigator.
///
/// [`NavigatorConfig::default()`] reproduces the production panel feel;
/// both windows are construction-time tunable.
#[derive(Debug, Clone, Copy)]
pub struct NavigatorConfig {
    /// Two clicks on a command field within this window fire its commit.
    /// Default: 300 ms.
    pub double_click_ms: u64,
    /// Inactivity in [`NavMode::ParameterEdit`] before dropping back to
    /// the page view. Default: 8000 ms.
    pub edit_timeout_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            double_click_ms: 300,
            edit_timeout_ms: 8000,
        }
    }
}

/// Transient message shown on the message row until the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Saved(u8),
    Loaded(u8),
    Initialized,
    EngineBusy,
}

/// The cursor record: everything that moves at runtime.
///
/// The menu tables themselves never change; these few indices are the
/// whole session state, reset to zero at power-up and owned exclusively
/// by the [`Navigator`].
#[derive(Debug, Clone, Copy)]
struct NavCursor {
    catalog: CatalogId,
    /// Remembered top-menu index, one per catalog, so switching catalogs
    /// and back lands where the user left off.
    menu: [usize; 2],
    /// Remembered page index per submenu, per catalog.
    page: [[usize; MAX_MENUS_PER_CATALOG]; 2],
    /// Active field within the visible page (0..4).
    field: usize,
}

/// Panel-local values for targets the engine knows nothing about.
#[derive(Debug, Clone, Copy, Default)]
struct Scratch {
    load_slot: u8,
    save_slot: u8,
    /// Sink for edits on inert filler slots; written, never read back
    /// anywhere else.
    filler: u8,
}

/// Walks the menu tables in response to panel input.
///
/// The navigator owns all cursor state, performs every read and write
/// against the [`ParamStore`], and rebuilds its [`DisplayFrame`] after
/// each processed event. Events must be fed one at a time from a single
/// consumer; the navigator itself never blocks.
///
/// # Examples
///
/// ```
/// use fascia::menu::{InputEvent, Navigator, NavigatorConfig, tables};
/// # use fascia::menu::{ParamStore, StoreError};
/// # struct Engine([u8; 512]);
/// # impl ParamStore for Engine {
/// #     fn get(&self, p: u16) -> Result<u8, StoreError> { Ok(self.0[p as usize]) }
/// #     fn set(&mut self, p: u16, v: u8) -> Result<(), StoreError> { self.0[p as usize] = v; Ok(()) }
/// #     fn commit_save(&mut self, _: u8) -> Result<(), StoreError> { Ok(()) }
/// #     fn commit_load(&mut self, _: u8) -> Result<(), StoreError> { Ok(()) }
/// #     fn commit_init(&mut self) -> Result<(), StoreError> { Ok(()) }
/// # }
///
/// let mut engine = Engine([0; 512]);
/// let mut nav = Navigator::new(&tables::MENUS, NavigatorConfig::default()).unwrap();
/// nav.redraw(&mut engine);
/// nav.handle(InputEvent::RotateCw, 0, &mut engine);
/// assert_eq!(nav.frame().row_str(0).trim_end(), "Oscillator 2");
/// ```
pub struct Navigator {
    menus: &'static MenuSet,
    cfg: NavigatorConfig,
    mode: NavMode,
    cursor: NavCursor,
    scratch: Scratch,
    /// Time of the last click on a command field, armed for double-click
    /// detection. Cleared by any other event, so a stale half of a
    /// double-click degrades to a plain click with no side effect.
    pending_click_ms: Option<u64>,
    /// Time of the last handled event, for the edit timeout.
    last_event_ms: u64,
    status: Status,
    frame: DisplayFrame,
}

impl Navigator {
    /// Build a navigator over validated tables.
    ///
    /// Returns the table defect if [`MenuSet::validate()`] rejects the
    /// configuration; callers should treat that as fatal.
    pub fn new(menus: &'static MenuSet, cfg: NavigatorConfig) -> Result<Self, ConfigError> {
        menus.validate()?;
        Ok(Self {
            menus,
            cfg,
            mode: NavMode::TopMenuSelect,
            cursor: NavCursor {
                catalog: CatalogId::Main,
                menu: [0; 2],
                page: [[0; MAX_MENUS_PER_CATALOG]; 2],
                field: 0,
            },
            scratch: Scratch::default(),
            pending_click_ms: None,
            last_event_ms: 0,
            status: Status::Idle,
            frame: DisplayFrame::blank(),
        })
    }

    // ── Event handling ───────────────────────────────────────────────

    /// Process one input event: state transition, store traffic, redraw.
    pub fn handle<S: ParamStore>(&mut self, event: InputEvent, now_ms: u64, store: &mut S) {
        self.status = Status::Idle;
        self.last_event_ms = now_ms;
        if !matches!(event, InputEvent::Click) {
            // Anything between two clicks breaks a double-click.
            self.pending_click_ms = None;
        }

        match self.mode {
            NavMode::TopMenuSelect => match event {
                InputEvent::RotateCw => self.step_menu(1),
                InputEvent::RotateCcw => self.step_menu(-1),
                InputEvent::Click => {
                    self.mode = NavMode::SubmenuPage;
                    self.snap_field();
                }
                InputEvent::CatalogSwitch => {
                    self.cursor.catalog = self.cursor.catalog.toggled();
                }
                InputEvent::Back => {}
                InputEvent::FieldAdjust { .. } => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("field adjust ignored outside a submenu");
                }
            },
            NavMode::SubmenuPage => match event {
                InputEvent::RotateCw => self.step_page(1),
                InputEvent::RotateCcw => self.step_page(-1),
                InputEvent::Click => self.on_click(now_ms, store),
                InputEvent::CatalogSwitch => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("catalog switch ignored inside a submenu");
                }
                InputEvent::Back => self.mode = NavMode::TopMenuSelect,
                InputEvent::FieldAdjust { field, delta } => {
                    self.adjust_field(field, delta, store)
                }
            },
            NavMode::ParameterEdit => match event {
                InputEvent::RotateCw => self.adjust_active(1, store),
                InputEvent::RotateCcw => self.adjust_active(-1, store),
                InputEvent::Click => self.on_click(now_ms, store),
                InputEvent::CatalogSwitch => {}
                InputEvent::Back => self.mode = NavMode::SubmenuPage,
                InputEvent::FieldAdjust { field, delta } => {
                    self.adjust_field(field, delta, store)
                }
            },
        }

        self.redraw(store);
    }

    /// Time-based housekeeping, called periodically between events.
    ///
    /// An edit left alone past the configured timeout drops back to the
    /// page view, exactly as a click would.
    pub fn poll<S: ParamStore>(&mut self, now_ms: u64, store: &mut S) {
        if matches!(self.mode, NavMode::ParameterEdit)
            && now_ms.saturating_sub(self.last_event_ms) >= self.cfg.edit_timeout_ms
        {
            self.mode = NavMode::SubmenuPage;
            self.pending_click_ms = None;
            self.status = Status::Idle;
            self.redraw(store);
        }
    }

    // ── Read-side accessors ──────────────────────────────────────────

    /// The frame to display, rebuilt after every processed event.
    pub fn frame(&self) -> &DisplayFrame {
        &self.frame
    }

    /// Current state machine state.
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// Currently active catalog.
    pub fn catalog(&self) -> CatalogId {
        self.cursor.catalog
    }

    /// Top-menu index within the active catalog.
    pub fn menu_index(&self) -> usize {
        self.cursor.menu[self.cursor.catalog.index()]
    }

    /// Page index within the active submenu.
    pub fn page_index(&self) -> usize {
        self.current_page()
    }

    /// Active field within the visible page.
    pub fn field_index(&self) -> usize {
        self.cursor.field
    }

    // ── Cursor movement ──────────────────────────────────────────────

    /// Clamp a cursor read. Indices are kept in range by every mutation
    /// path, so hitting the clamp means a programming error; it is
    /// logged and survived rather than crashed on.
    fn clamped(idx: usize, len: usize) -> usize {
        if idx < len {
            idx
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("cursor index {} out of range (len {})", idx, len);
            len - 1
        }
    }

    fn active_catalog(&self) -> &'static [Submenu] {
        self.menus.catalog(self.cursor.catalog)
    }

    fn active_submenu(&self) -> &'static Submenu {
        let menus = self.active_catalog();
        &menus[Self::clamped(self.menu_index(), menus.len())]
    }

    fn current_page(&self) -> usize {
        let cat = self.cursor.catalog.index();
        let menu = Self::clamped(self.menu_index(), MAX_MENUS_PER_CATALOG);
        Self::clamped(self.cursor.page[cat][menu], self.active_submenu().page_count())
    }

    fn descriptor_at(&self, field: usize) -> &'static ParamDescriptor {
        let entries = self.active_submenu().entries;
        let idx = self.current_page() * PAGE_WIDTH + Self::clamped(field, PAGE_WIDTH);
        &entries[Self::clamped(idx, entries.len())]
    }

    fn step_menu(&mut self, dir: i32) {
        let len = self.active_catalog().len();
        let cat = self.cursor.catalog.index();
        let cur = Self::clamped(self.cursor.menu[cat], len) as i32;
        self.cursor.menu[cat] = (cur + dir).rem_euclid(len as i32) as usize;
    }

    fn step_page(&mut self, dir: i32) {
        let pages = self.active_submenu().page_count();
        let cat = self.cursor.catalog.index();
        let menu = Self::clamped(self.menu_index(), MAX_MENUS_PER_CATALOG);
        let cur = Self::clamped(self.cursor.page[cat][menu], pages) as i32;
        self.cursor.page[cat][menu] = (cur + dir).rem_euclid(pages as i32) as usize;
        self.snap_field();
    }

    /// Park the field cursor on the first editable slot of the visible
    /// page, or slot 0 of an all-filler page.
    fn snap_field(&mut self) {
        let base = self.current_page() * PAGE_WIDTH;
        let entries = self.active_submenu().entries;
        self.cursor.field = (0..PAGE_WIDTH)
            .find(|&f| entries[base + f].is_editable())
            .unwrap_or(0);
    }

    /// Move the field cursor to the next editable slot on the page,
    /// wrapping; stays put when the active slot is the only editable one.
    fn advance_field(&mut self) {
        let base = self.current_page() * PAGE_WIDTH;
        let entries = self.active_submenu().entries;
        for off in 1..=PAGE_WIDTH {
            let f = (self.cursor.field + off) % PAGE_WIDTH;
            if entries[base + f].is_editable() {
                self.cursor.field = f;
                return;
            }
        }
    }

    // ── Clicks and commits ───────────────────────────────────────────

    /// Click handling shared by the page and edit states.
    ///
    /// Command fields follow the double-click protocol: the first click
    /// arms, a second within the window commits exactly once and drops
    /// back to the page view. Destructive saves and loads can therefore
    /// never fire from a single click. Ordinary fields toggle between
    /// browsing and editing, stepping to the next editable slot on the
    /// way out so repeated clicking walks the visible fields.
    fn on_click<S: ParamStore>(&mut self, now_ms: u64, store: &mut S) {
        let d = self.descriptor_at(self.cursor.field);

        if d.target.is_command() {
            if let Some(armed_ms) = self.pending_click_ms {
                if now_ms.saturating_sub(armed_ms) <= self.cfg.double_click_ms {
                    self.pending_click_ms = None;
                    self.commit(d.target, store);
                    self.mode = NavMode::SubmenuPage;
                    return;
                }
            }
            self.pending_click_ms = Some(now_ms);
        } else {
            self.pending_click_ms = None;
        }

        match self.mode {
            NavMode::SubmenuPage => {
                if d.is_editable() {
                    self.mode = NavMode::ParameterEdit;
                }
                // Clicks on filler slots are absorbed.
            }
            NavMode::ParameterEdit => {
                self.mode = NavMode::SubmenuPage;
                if !d.target.is_command() {
                    self.advance_field();
                }
            }
            NavMode::TopMenuSelect => {}
        }
    }

    fn commit<S: ParamStore>(&mut self, target: Target, store: &mut S) {
        let result = match target {
            Target::SaveSlot => store
                .commit_save(self.scratch.save_slot)
                .map(|()| Status::Saved(self.scratch.save_slot)),
            Target::LoadSlot => store
                .commit_load(self.scratch.load_slot)
                .map(|()| Status::Loaded(self.scratch.load_slot)),
            Target::InitPatch => store.commit_init().map(|()| Status::Initialized),
            Target::Param(_) | Target::Filler => return,
        };
        self.status = match result {
            Ok(status) => status,
            Err(_) => Status::EngineBusy,
        };
    }

    // ── Value edits ──────────────────────────────────────────────────

    fn adjust_active<S: ParamStore>(&mut self, delta: i32, store: &mut S) {
        let d = self.descriptor_at(self.cursor.field);
        self.adjust_value(d, delta, store);
    }

    /// Direct-adjust encoder: select the field and nudge its value in one
    /// motion. Inert on filler slots and never changes the nav state.
    fn adjust_field<S: ParamStore>(&mut self, field: usize, delta: i32, store: &mut S) {
        let field = Self::clamped(field, PAGE_WIDTH);
        let d = self.descriptor_at(field);
        if !d.is_editable() {
            return;
        }
        self.cursor.field = field;
        self.adjust_value(d, delta, store);
    }

    fn adjust_value<S: ParamStore>(
        &mut self,
        d: &ParamDescriptor,
        delta: i32,
        store: &mut S,
    ) {
        if !d.is_editable() {
            return;
        }
        match d.target {
            Target::Param(id) => {
                let cur = match store.get(id) {
                    Ok(v) => v,
                    Err(_) => {
                        self.status = Status::EngineBusy;
                        return;
                    }
                };
                let next = step_value(cur, delta, d.range);
                if next != cur && store.set(id, next).is_err() {
                    self.status = Status::EngineBusy;
                }
            }
            Target::LoadSlot => {
                self.scratch.load_slot = step_value(self.scratch.load_slot, delta, d.range);
            }
            Target::SaveSlot => {
                self.scratch.save_slot = step_value(self.scratch.save_slot, delta, d.range);
            }
            // Nothing to adjust: the trigger has a single value.
            Target::InitPatch => {}
            Target::Filler => {
                self.scratch.filler = step_value(self.scratch.filler, delta, d.range);
            }
        }
    }

    // ── Frame building ───────────────────────────────────────────────

    /// Value shown for a descriptor. Engine parameters are read fresh
    /// from the store; panel-local targets come from scratch state.
    fn field_value<S: ParamStore>(
        &self,
        d: &ParamDescriptor,
        store: &S,
    ) -> Result<u8, StoreError> {
        match d.target {
            Target::Param(id) => store.get(id),
            Target::LoadSlot => Ok(self.scratch.load_slot),
            Target::SaveSlot => Ok(self.scratch.save_slot),
            Target::InitPatch => Ok(0),
            Target::Filler => Ok(self.scratch.filler),
        }
    }

    /// Rebuild the display frame from the cursor state and the store.
    ///
    /// Public so the runtime can paint the initial screen before any
    /// input arrives; every `handle()` call ends here on its own. A store
    /// read failure keeps the failing cell's previous text and flags the
    /// message row instead of blanking the value.
    pub fn redraw<S: ParamStore>(&mut self, store: &mut S) {
        let prev = self.frame;
        let mut f = DisplayFrame::blank();
        let submenu = self.active_submenu();

        f.write_str(MENU_ROW, 0, submenu.name);

        let base = self.current_page() * PAGE_WIDTH;
        let mut store_failed = false;
        for field in 0..PAGE_WIDTH {
            let d = &submenu.entries[base + field];
            let col = field * FIELD_WIDTH;
            f.write_str(LABEL_ROW, col, d.short);
            match d.display {
                ValueDisplay::None => {}
                ValueDisplay::Numeric => match self.field_value(d, store) {
                    Ok(v) => f.write_num(VALUE_ROW, col, v),
                    Err(_) => {
                        store_failed = true;
                        f.copy_cell(&prev, VALUE_ROW, col);
                    }
                },
                ValueDisplay::Text(table) => match self.field_value(d, store) {
                    Ok(v) => {
                        // The engine can hand back values past the table
                        // end; render the last entry rather than index
                        // out of bounds.
                        let idx = (v as usize).min(table.len() - 1);
                        f.write_str(VALUE_ROW, col, table[idx]);
                    }
                    Err(_) => {
                        store_failed = true;
                        f.copy_cell(&prev, VALUE_ROW, col);
                    }
                },
            }
        }
        if store_failed && self.status == Status::Idle {
            self.status = Status::EngineBusy;
        }

        match self.status {
            Status::Idle => {
                if !matches!(self.mode, NavMode::TopMenuSelect) {
                    f.write_str(MESSAGE_ROW, 0, self.descriptor_at(self.cursor.field).long);
                }
            }
            Status::Saved(slot) => {
                f.write_str(MESSAGE_ROW, 0, "Saved to slot");
                f.write_num(MESSAGE_ROW, 14, slot);
            }
            Status::Loaded(slot) => {
                f.write_str(MESSAGE_ROW, 0, "Loaded from slot");
                f.write_num(MESSAGE_ROW, 16, slot);
            }
            Status::Initialized => f.write_str(MESSAGE_ROW, 0, "Patch initialized"),
            Status::EngineBusy => f.write_str(MESSAGE_ROW, 0, "Engine not ready"),
        }

        if matches!(self.mode, NavMode::ParameterEdit) {
            f.put(VALUE_ROW, self.cursor.field * FIELD_WIDTH + 4, b'<');
        }

        self.frame = f;
    }
}

/// Apply a signed step to a value, clamped to `[0, range]`.
fn step_value(cur: u8, delta: i32, range: u8) -> u8 {
    (cur as i32 + delta).clamp(0, range as i32) as u8
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::tables::MENUS;
    use super::*;

    // Main catalog landmarks, by table order.
    const OSC1: usize = 0;
    const INIT_PATCH: usize = 13;
    const SAVE_PATCH: usize = 14;
    const LOAD_PATCH: usize = 15;

    struct MockStore {
        values: [u8; 512],
        fail: bool,
        saves: usize,
        loads: usize,
        inits: usize,
        last_save: u8,
        last_load: u8,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                values: [0; 512],
                fail: false,
                saves: 0,
                loads: 0,
                inits: 0,
                last_save: 0,
                last_load: 0,
            }
        }
    }

    impl ParamStore for MockStore {
        fn get(&self, param: u16) -> Result<u8, StoreError> {
            if self.fail {
                return Err(StoreError::NotReady);
            }
            Ok(self.values[param as usize])
        }

        fn set(&mut self, param: u16, value: u8) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::NotReady);
            }
            self.values[param as usize] = value;
            Ok(())
        }

        fn commit_save(&mut self, slot: u8) -> Result<(), StoreError> {
            self.saves += 1;
            self.last_save = slot;
            Ok(())
        }

        fn commit_load(&mut self, slot: u8) -> Result<(), StoreError> {
            self.loads += 1;
            self.last_load = slot;
            Ok(())
        }

        fn commit_init(&mut self) -> Result<(), StoreError> {
            self.inits += 1;
            Ok(())
        }
    }

    fn nav() -> Navigator {
        Navigator::new(&MENUS, NavigatorConfig::default()).unwrap()
    }

    /// Rotate to a main-catalog menu and click into it.
    fn open_menu(n: &mut Navigator, s: &mut MockStore, menu: usize) {
        for _ in 0..menu {
            n.handle(InputEvent::RotateCw, 0, s);
        }
        n.handle(InputEvent::Click, 0, s);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
    }

    // ── Top-menu navigation ──────────────────────────────────────────

    #[test]
    fn starts_on_first_main_menu() {
        let n = nav();
        assert_eq!(n.mode(), NavMode::TopMenuSelect);
        assert_eq!(n.catalog(), CatalogId::Main);
        assert_eq!(n.menu_index(), 0);
    }

    #[test]
    fn top_menu_rotation_wraps() {
        let mut n = nav();
        let mut s = MockStore::new();
        let len = MENUS.main.len();

        n.handle(InputEvent::RotateCcw, 0, &mut s);
        assert_eq!(n.menu_index(), len - 1);

        n.handle(InputEvent::RotateCw, 0, &mut s);
        assert_eq!(n.menu_index(), 0);

        for _ in 0..len {
            n.handle(InputEvent::RotateCw, 0, &mut s);
        }
        assert_eq!(n.menu_index(), 0);
    }

    #[test]
    fn top_menu_rotation_round_trips() {
        let mut n = nav();
        let mut s = MockStore::new();
        for _ in 0..7 {
            n.handle(InputEvent::RotateCw, 0, &mut s);
        }
        for _ in 0..7 {
            n.handle(InputEvent::RotateCcw, 0, &mut s);
        }
        assert_eq!(n.menu_index(), 0);
    }

    #[test]
    fn catalog_switch_restores_menu_index() {
        let mut n = nav();
        let mut s = MockStore::new();
        for _ in 0..3 {
            n.handle(InputEvent::RotateCw, 0, &mut s);
        }
        assert_eq!(n.menu_index(), 3);

        n.handle(InputEvent::CatalogSwitch, 0, &mut s);
        assert_eq!(n.catalog(), CatalogId::Extra);
        assert_eq!(n.menu_index(), 0);

        n.handle(InputEvent::RotateCw, 0, &mut s);
        n.handle(InputEvent::RotateCw, 0, &mut s);
        assert_eq!(n.menu_index(), 2);

        n.handle(InputEvent::CatalogSwitch, 0, &mut s);
        assert_eq!(n.catalog(), CatalogId::Main);
        assert_eq!(n.menu_index(), 3);

        n.handle(InputEvent::CatalogSwitch, 0, &mut s);
        assert_eq!(n.menu_index(), 2);
    }

    // ── Submenu paging ───────────────────────────────────────────────

    #[test]
    fn click_opens_submenu_and_back_returns() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::Back, 0, &mut s);
        assert_eq!(n.mode(), NavMode::TopMenuSelect);
    }

    #[test]
    fn paging_wraps_after_last_page() {
        // Oscillator 1 has 9 real entries padded to 12: pages 0, 1, 2.
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        assert_eq!(n.page_index(), 0);

        let mut visited = [0usize; 4];
        for (i, slot) in visited.iter_mut().enumerate() {
            if i > 0 {
                n.handle(InputEvent::RotateCw, 0, &mut s);
            }
            *slot = n.page_index();
        }
        assert_eq!(visited, [0, 1, 2, 0]);

        n.handle(InputEvent::RotateCcw, 0, &mut s);
        assert_eq!(n.page_index(), 2);
    }

    #[test]
    fn page_position_remembered_per_submenu() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::RotateCw, 0, &mut s);
        assert_eq!(n.page_index(), 1);

        n.handle(InputEvent::Back, 0, &mut s);
        n.handle(InputEvent::RotateCw, 0, &mut s); // Oscillator 2
        n.handle(InputEvent::Click, 0, &mut s);
        assert_eq!(n.page_index(), 0);

        n.handle(InputEvent::Back, 0, &mut s);
        n.handle(InputEvent::RotateCcw, 0, &mut s); // back to Oscillator 1
        n.handle(InputEvent::Click, 0, &mut s);
        assert_eq!(n.page_index(), 1);
    }

    #[test]
    fn catalog_switch_absorbed_in_submenu() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::CatalogSwitch, 0, &mut s);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
        assert_eq!(n.catalog(), CatalogId::Main);
    }

    // ── Editing ──────────────────────────────────────────────────────

    #[test]
    fn click_enters_and_leaves_edit() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);

        n.handle(InputEvent::Click, 0, &mut s);
        assert_eq!(n.mode(), NavMode::ParameterEdit);
        assert_eq!(n.field_index(), 0);

        n.handle(InputEvent::Click, 1000, &mut s);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
        // Leaving an edit pre-selects the next editable field.
        assert_eq!(n.field_index(), 1);
    }

    #[test]
    fn edit_rotation_writes_and_clamps() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::Click, 0, &mut s); // edit ENAB, range 1, param 1

        n.handle(InputEvent::RotateCw, 0, &mut s);
        assert_eq!(s.values[1], 1);
        n.handle(InputEvent::RotateCw, 0, &mut s);
        assert_eq!(s.values[1], 1);

        for _ in 0..5 {
            n.handle(InputEvent::RotateCcw, 0, &mut s);
        }
        assert_eq!(s.values[1], 0);
    }

    #[test]
    fn field_adjust_selects_and_clamps() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);

        // Field 2 on page 0 is Detune, engine parameter 23, range 255.
        n.handle(InputEvent::FieldAdjust { field: 2, delta: 300 }, 0, &mut s);
        assert_eq!(n.field_index(), 2);
        assert_eq!(s.values[23], 255);

        n.handle(InputEvent::FieldAdjust { field: 2, delta: -300 }, 0, &mut s);
        assert_eq!(s.values[23], 0);

        n.handle(InputEvent::FieldAdjust { field: 2, delta: 3 }, 0, &mut s);
        assert_eq!(s.values[23], 3);
    }

    #[test]
    fn field_adjust_ignored_on_filler_and_in_top_menu() {
        let mut n = nav();
        let mut s = MockStore::new();

        n.handle(InputEvent::FieldAdjust { field: 0, delta: 5 }, 0, &mut s);
        assert_eq!(n.mode(), NavMode::TopMenuSelect);

        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::RotateCw, 0, &mut s);
        n.handle(InputEvent::RotateCw, 0, &mut s); // page 2: SDET + 3 fillers
        assert_eq!(n.field_index(), 0);
        n.handle(InputEvent::FieldAdjust { field: 3, delta: 5 }, 0, &mut s);
        // Filler slot: no selection change, no store traffic.
        assert_eq!(n.field_index(), 0);
        assert_eq!(s.values, [0; 512]);
    }

    #[test]
    fn store_failure_reports_and_keeps_last_value() {
        let mut n = nav();
        let mut s = MockStore::new();
        s.values[23] = 42;
        open_menu(&mut n, &mut s, OSC1);
        assert_eq!(n.frame().row_str(3), " OFF SAWU   42    0 ");

        s.fail = true;
        n.handle(InputEvent::FieldAdjust { field: 2, delta: 1 }, 0, &mut s);
        assert_eq!(n.frame().row_str(1).trim_end(), "Engine not ready");
        // The stale cells keep their last good text.
        assert_eq!(n.frame().row_str(3), " OFF SAWU   42    0 ");

        s.fail = false;
        n.handle(InputEvent::FieldAdjust { field: 2, delta: 1 }, 0, &mut s);
        assert_eq!(s.values[23], 43);
    }

    #[test]
    fn edit_timeout_returns_to_page() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::Click, 1000, &mut s);
        assert_eq!(n.mode(), NavMode::ParameterEdit);

        n.poll(8999, &mut s);
        assert_eq!(n.mode(), NavMode::ParameterEdit);

        n.poll(9000, &mut s);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
    }

    // ── Command targets and double-click ─────────────────────────────

    #[test]
    fn single_click_never_commits() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, LOAD_PATCH);
        n.handle(InputEvent::Click, 1000, &mut s);
        assert_eq!(n.mode(), NavMode::ParameterEdit);
        assert_eq!(s.loads, 0);
        assert_eq!(s.saves, 0);
        assert_eq!(s.inits, 0);
    }

    #[test]
    fn double_click_loads_selected_slot_once() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, LOAD_PATCH);

        n.handle(InputEvent::Click, 1000, &mut s);
        for _ in 0..5 {
            n.handle(InputEvent::RotateCw, 1100, &mut s);
        }
        assert_eq!(n.frame().row_str(3), "   5<               ");

        n.handle(InputEvent::Click, 2000, &mut s);
        n.handle(InputEvent::Click, 2100, &mut s);
        assert_eq!(s.loads, 1);
        assert_eq!(s.last_load, 5);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
        assert_eq!(n.frame().row_str(1), "Loaded from slot   5");
    }

    #[test]
    fn slow_second_click_does_not_commit() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, LOAD_PATCH);
        n.handle(InputEvent::Click, 1000, &mut s);
        n.handle(InputEvent::Click, 1400, &mut s);
        assert_eq!(s.loads, 0);
    }

    #[test]
    fn rotation_between_clicks_cancels_double_click() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, LOAD_PATCH);
        n.handle(InputEvent::Click, 1000, &mut s);
        n.handle(InputEvent::RotateCw, 1050, &mut s);
        n.handle(InputEvent::Click, 1100, &mut s);
        assert_eq!(s.loads, 0);
    }

    #[test]
    fn double_click_saves_selected_slot() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, SAVE_PATCH);
        n.handle(InputEvent::Click, 1000, &mut s);
        for _ in 0..12 {
            n.handle(InputEvent::RotateCw, 1100, &mut s);
        }
        n.handle(InputEvent::Click, 2000, &mut s);
        n.handle(InputEvent::Click, 2200, &mut s);
        assert_eq!(s.saves, 1);
        assert_eq!(s.last_save, 12);
        assert_eq!(n.frame().row_str(1), "Saved to slot   12  ");
    }

    #[test]
    fn double_click_initializes_patch() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, INIT_PATCH);
        n.handle(InputEvent::Click, 1000, &mut s);
        n.handle(InputEvent::Click, 1150, &mut s);
        assert_eq!(s.inits, 1);
        assert_eq!(n.frame().row_str(1).trim_end(), "Patch initialized");
    }

    #[test]
    fn load_and_save_slots_are_independent() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, LOAD_PATCH);
        n.handle(InputEvent::Click, 1000, &mut s);
        for _ in 0..3 {
            n.handle(InputEvent::RotateCw, 1100, &mut s);
        }
        n.handle(InputEvent::Back, 2000, &mut s);
        n.handle(InputEvent::Back, 2000, &mut s);
        assert_eq!(n.mode(), NavMode::TopMenuSelect);

        // Adjusting the save slot must not disturb the load slot.
        n.handle(InputEvent::RotateCcw, 3000, &mut s);
        n.handle(InputEvent::Click, 3000, &mut s); // Save Patch
        n.handle(InputEvent::Click, 4000, &mut s);
        n.handle(InputEvent::RotateCw, 4100, &mut s);
        assert_eq!(n.frame().row_str(3), "   1<               ");

        n.handle(InputEvent::Click, 5000, &mut s);
        n.handle(InputEvent::Click, 5100, &mut s);
        assert_eq!(s.saves, 1);
        assert_eq!(s.last_save, 1);
        assert_eq!(s.loads, 0);
    }

    // ── Frame contents ───────────────────────────────────────────────

    #[test]
    fn frame_shows_menu_name_and_page_fields() {
        let mut n = nav();
        let mut s = MockStore::new();
        n.redraw(&mut s);
        assert_eq!(n.frame().row_str(0), "Oscillator 1        ");
        assert_eq!(n.frame().row_str(2), "ENAB WAVE DTUN TPOS ");
        assert_eq!(n.frame().row_str(3), " OFF SAWU    0    0 ");
        // No field is active while choosing a top menu.
        assert_eq!(n.frame().row_str(1), "                    ");
    }

    #[test]
    fn message_row_shows_active_field_long_label() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        assert_eq!(n.frame().row_str(1).trim_end(), "Osc. On/Off");

        n.handle(InputEvent::FieldAdjust { field: 2, delta: 0 }, 0, &mut s);
        assert_eq!(n.frame().row_str(1).trim_end(), "Detune");
    }

    #[test]
    fn edit_mode_marks_active_value_cell() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::Click, 0, &mut s);
        assert_eq!(n.frame().row_str(3), " OFF<SAWU    0    0 ");
    }

    #[test]
    fn text_values_render_through_their_table() {
        let mut n = nav();
        let mut s = MockStore::new();
        s.values[11] = 2; // waveform: square
        open_menu(&mut n, &mut s, OSC1);
        assert_eq!(n.frame().row_str(3), " OFF  SQR    0    0 ");

        // An engine value past the table end renders the last entry
        // instead of panicking.
        s.values[11] = 200;
        n.handle(InputEvent::FieldAdjust { field: 0, delta: 0 }, 0, &mut s);
        assert_eq!(n.frame().row_str(3), " OFF SS7S    0    0 ");
    }

    #[test]
    fn filler_value_cells_stay_blank() {
        let mut n = nav();
        let mut s = MockStore::new();
        open_menu(&mut n, &mut s, OSC1);
        n.handle(InputEvent::RotateCw, 0, &mut s);
        n.handle(InputEvent::RotateCw, 0, &mut s); // page 2: SDET + fillers
        assert_eq!(n.frame().row_str(2), "SDET                ");
        assert_eq!(n.frame().row_str(3), "   0                ");
    }

    #[test]
    fn click_on_all_filler_page_is_absorbed() {
        static BLANK_ENTRIES: [ParamDescriptor; 4] = [ParamDescriptor::filler(); 4];
        static BLANK_MENUS: [Submenu; 1] = [Submenu {
            name: "Blank",
            entries: &BLANK_ENTRIES,
        }];
        static BLANK_SET: MenuSet = MenuSet {
            main: &BLANK_MENUS,
            extra: &BLANK_MENUS,
        };

        let mut n = Navigator::new(&BLANK_SET, NavigatorConfig::default()).unwrap();
        let mut s = MockStore::new();
        n.handle(InputEvent::Click, 0, &mut s);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
        n.handle(InputEvent::Click, 1000, &mut s);
        assert_eq!(n.mode(), NavMode::SubmenuPage);
    }

    #[test]
    fn new_rejects_defective_tables() {
        static BAD_ENTRIES: [ParamDescriptor; 2] = [ParamDescriptor::filler(); 2];
        static BAD_MENUS: [Submenu; 1] = [Submenu {
            name: "Bad",
            entries: &BAD_ENTRIES,
        }];
        static BAD_SET: MenuSet = MenuSet {
            main: &BAD_MENUS,
            extra: &BAD_MENUS,
        };

        assert!(Navigator::new(&BAD_SET, NavigatorConfig::default()).is_err());
    }
}
