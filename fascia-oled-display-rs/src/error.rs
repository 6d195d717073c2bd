//! Error types for the panel display.

use display_interface::DisplayError;

/// Errors that can occur while driving the panel display.
///
/// The `ssd1306` crate wraps all underlying I2C bus errors into
/// [`DisplayError`], so this enum is non-generic.
#[derive(Debug)]
pub enum PanelDisplayError {
    /// Display interface error (wraps I2C and other bus-level failures).
    Interface(DisplayError),
    /// The display hardware did not respond to initialisation.
    InitFailed,
    /// An operation was attempted before
    /// [`PanelDisplay::init()`](crate::PanelDisplay::init) succeeded.
    NotReady,
}

impl From<DisplayError> for PanelDisplayError {
    fn from(e: DisplayError) -> Self {
        PanelDisplayError::Interface(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PanelDisplayError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PanelDisplayError::Interface(_e) => defmt::write!(f, "Display interface error"),
            PanelDisplayError::InitFailed => defmt::write!(f, "Initialisation failed"),
            PanelDisplayError::NotReady => defmt::write!(f, "Display not initialised"),
        }
    }
}
