use super::descriptor::CatalogId;

/// Static-table defects detected by [`MenuSet::validate()`].
///
/// These indicate a build-time data mistake and are fatal at startup; they
/// are never produced while the navigator is running.
///
/// [`MenuSet::validate()`]: super::MenuSet::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A catalog has no submenus.
    EmptyCatalog { catalog: CatalogId },
    /// A catalog has more submenus than the navigator's cursor storage.
    CatalogOverflow { catalog: CatalogId },
    /// A submenu has no descriptors.
    EmptySubmenu { catalog: CatalogId, menu: usize },
    /// A submenu's length is not a multiple of the page width.
    MisalignedSubmenu { catalog: CatalogId, menu: usize },
    /// A text descriptor's table length does not equal `range + 1`.
    TextTableMismatch {
        catalog: CatalogId,
        menu: usize,
        entry: usize,
    },
    /// A descriptor addresses a parameter the engine does not have.
    ParamIdOutOfRange {
        catalog: CatalogId,
        menu: usize,
        entry: usize,
    },
}
