/// Errors surfaced by a [`ParamStore`] implementation.
///
/// Store failures are non-fatal: the navigator reports them on the message
/// row and keeps showing the last good value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// The engine is not accepting parameter traffic right now.
    NotReady,
    /// The engine does not recognise the parameter identifier.
    UnknownParam,
}

/// Boundary to the synthesis engine's parameter state.
///
/// The navigator is the only caller. `get`/`set` are expected to be fast,
/// synchronous, in-memory operations — a shadow table in front of whatever
/// link carries values to the voice — never blocking I/O. The commit hooks
/// are edge-triggered commands fired exclusively by a qualifying
/// double-click; they carry no persisted value of their own.
///
/// Only real engine parameter identifiers (below
/// [`ENGINE_PARAM_COUNT`](super::ENGINE_PARAM_COUNT)) ever reach `get` and
/// `set`; the panel-local pseudo-targets are handled inside the navigator.
pub trait ParamStore {
    /// Read the current value of a parameter.
    fn get(&self, param: u16) -> Result<u8, StoreError>;

    /// Write a new value for a parameter.
    fn set(&mut self, param: u16, value: u8) -> Result<(), StoreError>;

    /// Save the current patch to a memory slot.
    fn commit_save(&mut self, slot: u8) -> Result<(), StoreError>;

    /// Load a patch from a memory slot.
    fn commit_load(&mut self, slot: u8) -> Result<(), StoreError>;

    /// Reset the current patch to the initial state.
    fn commit_init(&mut self) -> Result<(), StoreError>;
}
