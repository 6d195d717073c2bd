//! Menu navigation over the voice's parameter map.
//!
//! This module provides the [`Navigator`] state machine that maps a small
//! four-line display and a handful of encoders onto the synthesizer voice's
//! ~512 patch parameters. It is the central piece of shared state driven by
//! the input scan task and read by the display task.
//!
//! # Architecture
//!
//! Parameters are grouped into **submenus** (one per synthesis block), each
//! a flat list of descriptors paged through in windows of 4 — one window
//! slot per display column and per direct-adjust encoder:
//!
//! ```text
//! Oscillator 1      page 0: [ENAB] [WAVE] [DTUN] [TPOS]
//!                   page 1: [  PW] [LEVL] [LVLL] [LVLR]
//!                   page 2: [SDET] [----] [----] [----]
//! ```
//!
//! Submenus are grouped into two **catalogs** — the main catalog carries the
//! per-voice synthesis blocks, the extra catalog the performance and system
//! pages — and a dedicated button toggles between them as whole sets.
//!
//! The tables in [`tables`] are immutable, statically-initialized
//! configuration. All mutable cursor state (active catalog, top-menu index,
//! per-submenu page, active field) lives inside the [`Navigator`], which is
//! the only code that moves it. Parameter values themselves live behind the
//! [`ParamStore`] boundary owned by the synthesis engine; the navigator
//! reads them afresh for every redraw and never caches beyond the previous
//! frame.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation anywhere: the tables are `'static`, cursor state is a
//! few fixed arrays, and the display frame is a fixed byte grid. The
//! optional `defmt` feature enables structured logging for embedded targets.

mod descriptor;
mod error;
mod frame;
mod navigator;
mod store;
pub mod tables;

pub use descriptor::{CatalogId, MenuSet, ParamDescriptor, Submenu, Target, ValueDisplay};
pub use error::ConfigError;
pub use frame::{DisplayFrame, FRAME_COLS, FRAME_ROWS};
pub use navigator::{InputEvent, NavMode, Navigator, NavigatorConfig, TimedEvent};
pub use store::{ParamStore, StoreError};

/// Number of descriptors shown (and directly adjustable) at once. Submenu
/// lengths must be a multiple of this so paging never straddles a window.
pub const PAGE_WIDTH: usize = 4;

/// Width of one field cell on the label and value rows: a 4-character
/// label or value plus one separator column.
pub const FIELD_WIDTH: usize = 5;

/// Number of real patch parameters understood by the synthesis engine.
/// [`Target::Param`] identifiers must be below this.
pub const ENGINE_PARAM_COUNT: u16 = 512;

/// Upper bound on submenus per catalog, sizing the navigator's remembered
/// page cursors. Checked by [`MenuSet::validate()`].
pub const MAX_MENUS_PER_CATALOG: usize = 16;
