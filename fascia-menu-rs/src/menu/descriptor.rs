use super::error::ConfigError;
use super::{ENGINE_PARAM_COUNT, MAX_MENUS_PER_CATALOG, PAGE_WIDTH};

/// How a descriptor's value is rendered on the value row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDisplay {
    /// Non-interactive layout filler: no value is rendered and clicks on
    /// the slot are absorbed. The slot still occupies a window position.
    None,
    /// Right-aligned decimal number.
    Numeric,
    /// The clamped value indexes an ordered table of display strings.
    /// The table is only reachable through this variant, so a text lookup
    /// on a numeric descriptor cannot be expressed.
    Text(&'static [&'static str]),
}

/// Where an edited value goes.
///
/// Engine parameters and panel-local commands are distinct at the type
/// level. The original firmware reserved identifiers 512–515 of the
/// parameter space for the load/save/init/filler pseudo-parameters; here
/// that mapping happens once, in the tables, and the navigation and store
/// paths only ever see the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// Ordinary patch parameter, addressed by engine identifier.
    Param(u16),
    /// Memory slot for a patch load. Committed on double-click only.
    LoadSlot,
    /// Memory slot for a patch save. Committed on double-click only.
    SaveSlot,
    /// Patch initialization trigger. Committed on double-click only.
    InitPatch,
    /// Inert slot: edits are accepted into scratch state and discarded.
    Filler,
}

impl Target {
    /// Returns `true` for the edge-triggered command targets that require
    /// a double-click to fire.
    pub fn is_command(&self) -> bool {
        matches!(self, Target::LoadSlot | Target::SaveSlot | Target::InitPatch)
    }
}

/// One entry in a submenu: a labelled, ranged binding from a window slot
/// to a parameter or panel command.
#[derive(Debug, Clone, Copy)]
pub struct ParamDescriptor {
    /// 4-character label shown on the label row.
    pub short: &'static str,
    /// Longer label shown on the message row while the field is active.
    pub long: &'static str,
    /// Inclusive upper bound of the value; the lower bound is 0.
    pub range: u8,
    /// How the value is rendered.
    pub display: ValueDisplay,
    /// Where edits go.
    pub target: Target,
}

impl ParamDescriptor {
    /// Numeric engine parameter.
    pub const fn numeric(
        short: &'static str,
        long: &'static str,
        range: u8,
        param: u16,
    ) -> Self {
        Self {
            short,
            long,
            range,
            display: ValueDisplay::Numeric,
            target: Target::Param(param),
        }
    }

    /// Engine parameter rendered through a text table. The range is the
    /// table length minus one, so the two can never drift apart.
    pub const fn choice(
        short: &'static str,
        long: &'static str,
        table: &'static [&'static str],
        param: u16,
    ) -> Self {
        Self {
            short,
            long,
            range: (table.len() - 1) as u8,
            display: ValueDisplay::Text(table),
            target: Target::Param(param),
        }
    }

    /// Blank padding slot.
    pub const fn filler() -> Self {
        Self {
            short: "    ",
            long: "",
            range: 0,
            display: ValueDisplay::None,
            target: Target::Filler,
        }
    }

    /// Non-interactive slot that still shows labels, used for hints such
    /// as a "more on the next page" marker.
    pub const fn note(short: &'static str, long: &'static str) -> Self {
        Self {
            short,
            long,
            range: 0,
            display: ValueDisplay::None,
            target: Target::Filler,
        }
    }

    /// Numeric slot bound to a panel command (load/save memory slot).
    pub const fn slot(
        short: &'static str,
        long: &'static str,
        range: u8,
        target: Target,
    ) -> Self {
        Self {
            short,
            long,
            range,
            display: ValueDisplay::Numeric,
            target,
        }
    }

    /// Returns `true` if the slot reacts to clicks and value edits.
    pub fn is_editable(&self) -> bool {
        !matches!(self.display, ValueDisplay::None)
    }
}

/// A named, page-able list of descriptors shown on one menu screen.
#[derive(Debug, Clone, Copy)]
pub struct Submenu {
    /// Top-menu label shown on the first display row.
    pub name: &'static str,
    /// Descriptors, padded to a multiple of [`PAGE_WIDTH`].
    pub entries: &'static [ParamDescriptor],
}

impl Submenu {
    /// Number of 4-wide pages in this submenu.
    pub fn page_count(&self) -> usize {
        self.entries.len() / PAGE_WIDTH
    }
}

/// Which of the two top-level catalogs is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogId {
    /// Per-voice synthesis blocks.
    Main,
    /// Performance and system pages.
    Extra,
}

impl CatalogId {
    /// Stable index for per-catalog cursor storage.
    pub fn index(self) -> usize {
        match self {
            CatalogId::Main => 0,
            CatalogId::Extra => 1,
        }
    }

    /// The other catalog.
    pub fn toggled(self) -> Self {
        match self {
            CatalogId::Main => CatalogId::Extra,
            CatalogId::Extra => CatalogId::Main,
        }
    }
}

/// The complete menu configuration: two parallel catalogs of submenus.
///
/// Built once as a `static` and never mutated; all cursor state lives in
/// the [`Navigator`](super::Navigator).
#[derive(Debug, Clone, Copy)]
pub struct MenuSet {
    pub main: &'static [Submenu],
    pub extra: &'static [Submenu],
}

impl MenuSet {
    /// The submenus of one catalog.
    pub fn catalog(&self, id: CatalogId) -> &'static [Submenu] {
        match id {
            CatalogId::Main => self.main,
            CatalogId::Extra => self.extra,
        }
    }

    /// Check the static tables for build-time data mistakes.
    ///
    /// Run once at startup before the navigator touches the tables; any
    /// error here is a fatal configuration defect, not a runtime
    /// condition. Checks, per catalog:
    ///
    /// - the catalog is non-empty and fits the navigator's cursor storage,
    /// - every submenu is non-empty and padded to a multiple of
    ///   [`PAGE_WIDTH`],
    /// - every text table has exactly `range + 1` entries,
    /// - every [`Target::Param`] identifier is a real engine parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for catalog in [CatalogId::Main, CatalogId::Extra] {
            let menus = self.catalog(catalog);
            if menus.is_empty() {
                return Err(ConfigError::EmptyCatalog { catalog });
            }
            if menus.len() > MAX_MENUS_PER_CATALOG {
                return Err(ConfigError::CatalogOverflow { catalog });
            }
            for (menu, submenu) in menus.iter().enumerate() {
                if submenu.entries.is_empty() {
                    return Err(ConfigError::EmptySubmenu { catalog, menu });
                }
                if submenu.entries.len() % PAGE_WIDTH != 0 {
                    return Err(ConfigError::MisalignedSubmenu { catalog, menu });
                }
                for (entry, d) in submenu.entries.iter().enumerate() {
                    if let ValueDisplay::Text(table) = d.display {
                        if table.len() != d.range as usize + 1 {
                            return Err(ConfigError::TextTableMismatch {
                                catalog,
                                menu,
                                entry,
                            });
                        }
                    }
                    if let Target::Param(id) = d.target {
                        if id >= ENGINE_PARAM_COUNT {
                            return Err(ConfigError::ParamIdOutOfRange {
                                catalog,
                                menu,
                                entry,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const WAVES: &[&str] = &[" SIN", " SQR"];

    #[test]
    fn choice_range_tracks_table_length() {
        let d = ParamDescriptor::choice("WAVE", "Waveform", WAVES, 11);
        assert_eq!(d.range, 1);
        assert!(matches!(d.display, ValueDisplay::Text(t) if t.len() == 2));
    }

    #[test]
    fn filler_is_not_editable() {
        assert!(!ParamDescriptor::filler().is_editable());
        assert!(!ParamDescriptor::note("--->", "More").is_editable());
        assert!(ParamDescriptor::numeric("DTUN", "Detune", 255, 23).is_editable());
    }

    #[test]
    fn command_targets() {
        assert!(Target::LoadSlot.is_command());
        assert!(Target::SaveSlot.is_command());
        assert!(Target::InitPatch.is_command());
        assert!(!Target::Param(7).is_command());
        assert!(!Target::Filler.is_command());
    }

    #[test]
    fn page_count_counts_windows() {
        static ENTRIES: [ParamDescriptor; 8] = [ParamDescriptor::filler(); 8];
        let sub = Submenu {
            name: "Test",
            entries: &ENTRIES,
        };
        assert_eq!(sub.page_count(), 2);
    }

    #[test]
    fn catalog_toggle_round_trips() {
        assert_eq!(CatalogId::Main.toggled(), CatalogId::Extra);
        assert_eq!(CatalogId::Main.toggled().toggled(), CatalogId::Main);
        assert_ne!(CatalogId::Main.index(), CatalogId::Extra.index());
    }

    #[test]
    fn validate_rejects_misaligned_submenu() {
        static ENTRIES: [ParamDescriptor; 3] = [ParamDescriptor::filler(); 3];
        static MENUS: [Submenu; 1] = [Submenu {
            name: "Bad",
            entries: &ENTRIES,
        }];
        let set = MenuSet {
            main: &MENUS,
            extra: &MENUS,
        };
        assert_eq!(
            set.validate(),
            Err(ConfigError::MisalignedSubmenu {
                catalog: CatalogId::Main,
                menu: 0
            })
        );
    }

    #[test]
    fn validate_rejects_short_text_table() {
        static ENTRIES: [ParamDescriptor; 4] = [
            // Range claims 5 values but the table only has 2.
            ParamDescriptor {
                short: "WAVE",
                long: "Waveform",
                range: 4,
                display: ValueDisplay::Text(WAVES),
                target: Target::Param(11),
            },
            ParamDescriptor::filler(),
            ParamDescriptor::filler(),
            ParamDescriptor::filler(),
        ];
        static MENUS: [Submenu; 1] = [Submenu {
            name: "Bad",
            entries: &ENTRIES,
        }];
        let set = MenuSet {
            main: &MENUS,
            extra: &MENUS,
        };
        assert_eq!(
            set.validate(),
            Err(ConfigError::TextTableMismatch {
                catalog: CatalogId::Main,
                menu: 0,
                entry: 0
            })
        );
    }

    #[test]
    fn validate_rejects_reserved_param_id() {
        static ENTRIES: [ParamDescriptor; 4] = [
            ParamDescriptor::numeric("SLOT", "Raw sentinel", 127, 513),
            ParamDescriptor::filler(),
            ParamDescriptor::filler(),
            ParamDescriptor::filler(),
        ];
        static MENUS: [Submenu; 1] = [Submenu {
            name: "Bad",
            entries: &ENTRIES,
        }];
        let set = MenuSet {
            main: &MENUS,
            extra: &MENUS,
        };
        assert_eq!(
            set.validate(),
            Err(ConfigError::ParamIdOutOfRange {
                catalog: CatalogId::Main,
                menu: 0,
                entry: 0
            })
        );
    }

    #[test]
    fn validate_rejects_empty_catalog() {
        static ENTRIES: [ParamDescriptor; 4] = [ParamDescriptor::filler(); 4];
        static MENUS: [Submenu; 1] = [Submenu {
            name: "Ok",
            entries: &ENTRIES,
        }];
        let set = MenuSet {
            main: &MENUS,
            extra: &[],
        };
        assert_eq!(
            set.validate(),
            Err(ConfigError::EmptyCatalog {
                catalog: CatalogId::Extra
            })
        );
    }
}
