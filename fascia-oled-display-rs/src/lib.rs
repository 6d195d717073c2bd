//! Async OLED panel display for the fascia front panel.
//!
//! This crate drives an SSD1306 (128×64) over I2C in async
//! buffered-graphics mode and renders the navigator's four-line
//! [`DisplayFrame`] with a 6×10 monospace font — a character LCD look on
//! an OLED. It provides [`PanelDisplay`], the display lifecycle wrapper,
//! and [`display_update_task`], a periodic loop that watches a shared
//! frame and flushes it to the hardware when it changes.
//!
//! # Quick Start
//!
//! ```ignore
//! use fascia_oled_display_rs::{display_update_task, FrameStyle, PanelDisplay};
//!
//! // In your Embassy main:
//! let panel = PanelDisplay::new(i2c, 0x3C);
//! spawner.spawn(oled_task(panel, frame, FrameStyle::default())).unwrap();
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn oled_task(
//!     panel: PanelDisplay<MyI2cType>,
//!     frame: &'static Mutex<CriticalSectionRawMutex, DisplayFrame>,
//!     style: FrameStyle,
//! ) {
//!     display_update_task(panel, frame, style).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** *(default)* — structured logging via [`defmt`].
//! - **`task`** — the periodic update task (pulls in Embassy).
//!
//! [`DisplayFrame`]: fascia::menu::DisplayFrame

#![no_std]

#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod layout;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "task")]
pub use display_task::display_update_task;
pub use driver::PanelDisplay;
pub use error::PanelDisplayError;
pub use layout::{render_frame, FrameStyle};
