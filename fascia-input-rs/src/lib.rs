//! Panel input scanning for the fascia front panel.
//!
//! This crate turns raw GPIO levels — the menu encoder, its push switch,
//! the catalog button, and the four direct-adjust encoders — into the
//! discrete [`fascia::menu::InputEvent`] stream the navigator consumes.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`QuadDecoder`] / [`Switch`]** — Pure decoding logic: a full-step
//!   quadrature transition table and a debounced press classifier. No
//!   hardware types, fully host-tested.
//! - **[`scan_task`]** *(feature `task`)* — An Embassy loop that samples
//!   the pins on a 1 ms tick, runs the decoders, and pushes timestamped
//!   events into a bounded single-consumer channel. The navigator task is
//!   the only receiver, so events are processed strictly one at a time.
//!
//! # Features
//!
//! - **`task`** — Enable the async scan task (pulls in `embassy-time` and
//!   `embassy-sync`).
//! - **`defmt`** — Structured logging for embedded targets.

#![no_std]

pub use quadrature::QuadDecoder;
pub use switch::{Switch, SwitchConfig, SwitchEvent};

#[cfg(feature = "task")]
pub use scan::{scan_task, InputQueue, PanelPins, INPUT_QUEUE_DEPTH};

mod quadrature;
#[cfg(feature = "task")]
mod scan;
mod switch;
