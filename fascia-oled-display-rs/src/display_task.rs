//! Periodic display update task.
//!
//! Watches the shared [`DisplayFrame`] the navigator publishes and pushes
//! changed frames to the hardware. Keeping the task on the display side of
//! the frame mutex means the navigator never waits on I2C.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::I2c;

use fascia::menu::DisplayFrame;

use crate::driver::PanelDisplay;
use crate::layout::{render_frame, FrameStyle};

/// Periodic display update loop.
///
/// This is a regular generic `async fn` — **not** an Embassy `#[task]`.
/// Firmware creates a thin concrete wrapper, since Embassy tasks cannot
/// be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(
///     panel: PanelDisplay<MyConcreteI2cType>,
///     frame: &'static Mutex<CriticalSectionRawMutex, DisplayFrame>,
///     style: FrameStyle,
/// ) {
///     display_update_task(panel, frame, style).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the display hardware.
/// 2. Loop at `style.update_frequency_hz`:
///    - Copy the shared frame (mutex held for an 80-byte copy, nothing
///      more).
///    - Skip the cycle if it matches the last flushed frame.
///    - Clear, render, and flush — no mutex held during I2C.
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns** (task exits).
/// * Render / flush failure: logs the error and continues; the frame
///   stays marked dirty, so the next cycle retries.
pub async fn display_update_task<I2C>(
    mut panel: PanelDisplay<I2C>,
    frame: &'static Mutex<CriticalSectionRawMutex, DisplayFrame>,
    style: FrameStyle,
) where
    I2C: I2c,
{
    if let Err(_e) = panel.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("display init failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("panel display initialised");

    let period = embassy_time::Duration::from_millis(style.update_period_ms());
    let mut last_flushed: Option<DisplayFrame> = None;

    loop {
        embassy_time::Timer::after(period).await;

        let snapshot = *frame.lock().await;

        if last_flushed == Some(snapshot) {
            continue;
        }

        panel.clear_buffer();
        match panel.draw_target() {
            Some(target) => {
                if render_frame(target, &snapshot, &style).is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::error!("frame render failed");
                    continue;
                }
            }
            // Unreachable once init() has succeeded, but guard anyway.
            None => continue,
        }

        if let Err(_e) = panel.flush().await {
            #[cfg(feature = "defmt")]
            defmt::error!("frame flush failed: {}", _e);
            continue;
        }

        last_flushed = Some(snapshot);
    }
}
