//! Core menu logic for the fascia synthesizer front panel.
//!
//! This crate is the hardware-independent heart of the panel firmware: the
//! menu/parameter tables, the navigator state machine that walks them, and
//! the four-line text frame handed to the display driver. It has no
//! mandatory dependencies and every piece of it is exercised by host tests.
//!
//! The hardware-facing crates sit on top:
//!
//! - `fascia-input` turns encoder and switch pins into [`menu::InputEvent`]s.
//! - `fascia-oled-display-rs` renders [`menu::DisplayFrame`]s to the panel.
//! - `fascia-panel` wires everything together on the RP2350.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging for embedded targets.

#![no_std]

pub mod menu;
