//! fascia-panel
//!
//! Front-panel firmware for the Raspberry Pi Pico 2: encoders → menu
//! navigator → OLED display, wired from the three library crates into a
//! live interactive loop:
//!
//! 1. The scan task samples the menu encoder, its switch, the catalog
//!    button, and the four direct-adjust encoders every millisecond and
//!    queues timestamped navigation events.
//! 2. The navigator task — the queue's only consumer — feeds each event
//!    through the menu state machine, reads and writes the engine shadow
//!    store, and publishes a fresh four-line frame.
//! 3. The display task wakes on its 30 Hz timer, diffs the published
//!    frame against the last one flushed, and pushes changes to the
//!    SSD1306.
//!
//! The serial link that carries parameter writes and patch commands to
//! the synthesis engine attaches behind [`EngineShadow`]; this firmware
//! stage logs those operations instead.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{with_timeout, Duration, Instant, TimeoutError};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use fascia::menu::{
    tables::MENUS, DisplayFrame, Navigator, NavigatorConfig, ParamStore, StoreError,
    ENGINE_PARAM_COUNT,
};
use fascia_input::{scan_task, InputQueue, PanelPins};
use fascia_oled_display_rs::{display_update_task, FrameStyle, PanelDisplay};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Input events from the scan task to the navigator task. Bounded; the
/// scan side drops on overflow rather than stalling.
static INPUT_QUEUE: InputQueue = InputQueue::new();

/// The frame most recently published by the navigator — written after
/// every processed event, read by the display task.
static FRAME: StaticCell<Mutex<CriticalSectionRawMutex, DisplayFrame>> = StaticCell::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the OLED display.
type OledI2c = I2c<'static, I2C0, i2c::Async>;

// ---------------------------------------------------------------------------
// Engine shadow store
// ---------------------------------------------------------------------------

/// In-memory shadow of the voice's parameter state.
///
/// The navigator's `get`/`set` traffic lands here synchronously; the
/// engine serial link (not part of this stage) mirrors writes and the
/// patch commands to the synthesis core. Commit hooks are logged so the
/// double-click paths can be exercised end to end on bare hardware.
struct EngineShadow {
    values: [u8; ENGINE_PARAM_COUNT as usize],
}

impl EngineShadow {
    /// All parameters start at zero; the engine link seeds real patch
    /// values once it comes up.
    fn new() -> Self {
        Self {
            values: [0; ENGINE_PARAM_COUNT as usize],
        }
    }
}

impl ParamStore for EngineShadow {
    fn get(&self, param: u16) -> Result<u8, StoreError> {
        self.values
            .get(param as usize)
            .copied()
            .ok_or(StoreError::UnknownParam)
    }

    fn set(&mut self, param: u16, value: u8) -> Result<(), StoreError> {
        match self.values.get_mut(param as usize) {
            Some(slot) => {
                *slot = value;
                debug!("param {} = {}", param, value);
                Ok(())
            }
            None => Err(StoreError::UnknownParam),
        }
    }

    fn commit_save(&mut self, slot: u8) -> Result<(), StoreError> {
        info!("save patch to slot {}", slot);
        Ok(())
    }

    fn commit_load(&mut self, slot: u8) -> Result<(), StoreError> {
        info!("load patch from slot {}", slot);
        Ok(())
    }

    fn commit_init(&mut self) -> Result<(), StoreError> {
        info!("init patch");
        self.values = [0; ENGINE_PARAM_COUNT as usize];
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic scan loop so it can be
/// spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn input_task(pins: PanelPins<Input<'static>>, queue: &'static InputQueue) {
    scan_task(pins, queue).await
}

/// Thin wrapper that monomorphises the generic display loop.
#[embassy_executor::task]
async fn oled_task(
    panel: PanelDisplay<OledI2c>,
    frame: &'static Mutex<CriticalSectionRawMutex, DisplayFrame>,
    style: FrameStyle,
) {
    display_update_task(panel, frame, style).await;
}

/// The single consumer of the input queue.
///
/// Owns the navigator and the engine shadow outright — no other task
/// touches either, so event processing is strictly serialized. Between
/// events it polls the navigator so an abandoned edit times out.
#[embassy_executor::task]
async fn navigator_task(
    queue: &'static InputQueue,
    frame: &'static Mutex<CriticalSectionRawMutex, DisplayFrame>,
) {
    let mut nav = match Navigator::new(&MENUS, NavigatorConfig::default()) {
        Ok(nav) => nav,
        // A table defect is a build mistake; nothing sensible runs on it.
        Err(e) => panic!("menu tables rejected: {}", e),
    };
    let mut engine = EngineShadow::new();

    nav.redraw(&mut engine);
    *frame.lock().await = *nav.frame();
    info!("navigator ready");

    loop {
        match with_timeout(Duration::from_millis(250), queue.receive()).await {
            Ok(event) => nav.handle(event.event, event.at_ms, &mut engine),
            Err(TimeoutError) => nav.poll(Instant::now().as_millis(), &mut engine),
        }
        let rendered = *nav.frame();
        *frame.lock().await = rendered;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("fascia-panel starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // Field encoder 1   A → GP0,  B → GP1
    // Field encoder 2   A → GP2,  B → GP3
    // Field encoder 3   A → GP4,  B → GP5
    // Field encoder 4   A → GP6,  B → GP7
    // Menu encoder      A → GP10, B → GP11, switch → GP12
    // Catalog button    GP13
    // I2C_SDA → GP20, I2C_SCL → GP21 (SSD1306 at 0x3C)
    //
    // All switches and encoder lines are active-low with pull-ups; the
    // encoder commons and button returns go to ground.
    // ———————————————————————————————————————————————————————————————————————

    let pins = PanelPins {
        menu_a: Input::new(p.PIN_10, Pull::Up),
        menu_b: Input::new(p.PIN_11, Pull::Up),
        menu_sw: Input::new(p.PIN_12, Pull::Up),
        catalog_sw: Input::new(p.PIN_13, Pull::Up),
        field_ab: [
            (Input::new(p.PIN_0, Pull::Up), Input::new(p.PIN_1, Pull::Up)),
            (Input::new(p.PIN_2, Pull::Up), Input::new(p.PIN_3, Pull::Up)),
            (Input::new(p.PIN_4, Pull::Up), Input::new(p.PIN_5, Pull::Up)),
            (Input::new(p.PIN_6, Pull::Up), Input::new(p.PIN_7, Pull::Up)),
        ],
    };

    // The display is the only I2C0 device, so it owns the bus outright.
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );
    let panel = PanelDisplay::new(i2c, 0x3C);

    let frame = FRAME.init(Mutex::new(DisplayFrame::blank()));

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(oled_task(panel, frame, FrameStyle::default())).unwrap();
    spawner.spawn(navigator_task(&INPUT_QUEUE, frame)).unwrap();
    spawner.spawn(input_task(pins, &INPUT_QUEUE)).unwrap();

    info!("all tasks spawned");
}
