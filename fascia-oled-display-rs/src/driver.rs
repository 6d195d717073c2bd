//! Display lifecycle wrapper around the `ssd1306` crate.
//!
//! [`PanelDisplay`] owns the SSD1306 in async buffered-graphics mode:
//! construction without bus traffic, explicit async initialisation,
//! drawing into the frame buffer, and flushing it to the glass.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::PanelDisplayError;

/// Concrete display type used internally by [`PanelDisplay`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Async driver for the panel's SSD1306 128×64 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`PanelDisplay::new()`] — constructs the driver; no I2C traffic.
/// 2. [`PanelDisplay::init()`] — sends the initialisation sequence.
/// 3. Draw via [`PanelDisplay::draw_target()`].
/// 4. [`PanelDisplay::flush()`] — transfers the frame buffer to the glass.
///
/// The panel is mounted upside down in some enclosures; pass the matching
/// [`DisplayRotation`] at construction.
pub struct PanelDisplay<I2C> {
    display: Display<I2C>,
    /// Set after a successful `init()`; guards flush and drawing.
    ready: bool,
}

impl<I2C> PanelDisplay<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver for the standard mounting
    /// orientation.
    ///
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit device address, typically `0x3C` or `0x3D`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::with_rotation(i2c, address, DisplayRotation::Rotate0)
    }

    /// Construct with an explicit mounting rotation.
    pub fn with_rotation(i2c: I2C, address: u8, rotation: DisplayRotation) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, rotation)
            .into_buffered_graphics_mode();

        Self {
            display,
            ready: false,
        }
    }

    /// Send the SSD1306 initialisation sequence. Must succeed once before
    /// any rendering or flushing.
    pub async fn init(&mut self) -> Result<(), PanelDisplayError> {
        self.display
            .init()
            .await
            .map_err(|_| PanelDisplayError::InitFailed)?;
        self.ready = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer. No I2C traffic; the glass is
    /// unchanged until [`flush()`](Self::flush).
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Transfer the frame buffer to the glass. Roughly 20 ms of I2C at
    /// 400 kHz for a full frame, so callers must not hold shared state
    /// locked across this.
    pub async fn flush(&mut self) -> Result<(), PanelDisplayError> {
        if !self.ready {
            return Err(PanelDisplayError::NotReady);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// The underlying `embedded-graphics` draw target, or `None` before a
    /// successful [`init()`](Self::init).
    pub fn draw_target(&mut self) -> Option<&mut Display<I2C>> {
        if self.ready {
            Some(&mut self.display)
        } else {
            None
        }
    }

    /// Whether initialisation has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
