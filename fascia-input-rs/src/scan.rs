//! The async panel scan loop.
//!
//! Samples every input pin on a 1 ms tick, runs the pure decoders, and
//! pushes timestamped navigation events into a bounded channel. The
//! navigator task is the channel's only consumer, which gives the whole
//! panel its single-consumer event discipline: one event is fully
//! processed before the next is looked at, even though the sources are
//! concurrent hardware.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::InputPin;

use fascia::menu::{InputEvent, TimedEvent};

use crate::quadrature::QuadDecoder;
use crate::switch::{Switch, SwitchConfig, SwitchEvent};

/// Capacity of the input event queue. Deep enough for a fast spin of an
/// encoder between two navigator wakeups; overflow drops events rather
/// than blocking the scan.
pub const INPUT_QUEUE_DEPTH: usize = 16;

/// The single-consumer queue between the scan task and the navigator.
pub type InputQueue = Channel<CriticalSectionRawMutex, TimedEvent, INPUT_QUEUE_DEPTH>;

/// Every input pin on the panel, active-low switches and raw encoder
/// lines alike. All pins share one concrete GPIO type.
pub struct PanelPins<P> {
    /// Menu encoder A/B lines.
    pub menu_a: P,
    pub menu_b: P,
    /// Menu encoder push switch: short press is a click, hold steps back.
    pub menu_sw: P,
    /// Catalog toggle button.
    pub catalog_sw: P,
    /// A/B line pairs of the four direct-adjust encoders, left to right
    /// under the display.
    pub field_ab: [(P, P); 4],
}

/// Scan the panel forever, feeding `queue`.
///
/// This is a plain generic `async fn`; firmware wraps it in a concrete
/// Embassy task. Events are stamped with the scan-tick time so
/// double-click detection in the navigator is independent of queueing
/// latency. A full queue drops the event and logs — the navigator will
/// catch up on the next tick.
pub async fn scan_task<P: InputPin>(mut pins: PanelPins<P>, queue: &'static InputQueue) -> ! {
    let mut menu_dec = QuadDecoder::new(level(&mut pins.menu_a), level(&mut pins.menu_b));
    let mut field_decs: [QuadDecoder; 4] = core::array::from_fn(|i| {
        let (a, b) = &mut pins.field_ab[i];
        QuadDecoder::new(level(a), level(b))
    });
    let mut menu_sw = Switch::new(SwitchConfig::default());
    let mut catalog_sw = Switch::new(SwitchConfig::default());

    let mut ticker = Ticker::every(Duration::from_millis(1));
    loop {
        ticker.next().await;
        let now = Instant::now().as_millis();

        let step = menu_dec.update(level(&mut pins.menu_a), level(&mut pins.menu_b));
        if step > 0 {
            push(queue, InputEvent::RotateCw, now);
        } else if step < 0 {
            push(queue, InputEvent::RotateCcw, now);
        }

        match menu_sw.update(pressed(&mut pins.menu_sw), now) {
            Some(SwitchEvent::Click) => push(queue, InputEvent::Click, now),
            Some(SwitchEvent::Hold) => push(queue, InputEvent::Back, now),
            None => {}
        }

        // Holding the catalog button means nothing extra; only the click
        // toggles.
        if let Some(SwitchEvent::Click) = catalog_sw.update(pressed(&mut pins.catalog_sw), now) {
            push(queue, InputEvent::CatalogSwitch, now);
        }

        for (field, (a, b)) in pins.field_ab.iter_mut().enumerate() {
            let step = field_decs[field].update(level(a), level(b));
            if step != 0 {
                push(
                    queue,
                    InputEvent::FieldAdjust {
                        field,
                        delta: step as i32,
                    },
                    now,
                );
            }
        }
    }
}

/// Raw encoder line level. A read failure counts as low; the transition
/// table treats the resulting glitch as an illegal jump and ignores it.
fn level<P: InputPin>(pin: &mut P) -> bool {
    pin.is_high().unwrap_or(false)
}

/// Active-low switch sample.
fn pressed<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

fn push(queue: &InputQueue, event: InputEvent, at_ms: u64) {
    if queue.try_send(TimedEvent { event, at_ms }).is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("input queue full, dropping {}", event);
    }
}
