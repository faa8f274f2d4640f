//! The unit table.

use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;

use stockbook_core::{DomainError, field};
use stockbook_persist::{StorageError, load_document, save_document};

/// Units document, relative to the working directory.
pub const UNITS_FILE: &str = "units.json";

/// The unit every conversion factor is expressed against.
pub const BASE_UNIT: &str = "pieces";

/// Error from a unit-table operation.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Ordered mapping from unit name to conversion factor.
///
/// Persisted as its own document, independent of the inventory. A fresh
/// table starts with the base unit at factor 1. Entries are overwritten
/// by re-registration and never deleted.
#[derive(Debug)]
pub struct UnitTable {
    path: PathBuf,
    units: IndexMap<String, f64>,
}

impl UnitTable {
    /// Load the table at `path`, or start with the default entry when the
    /// document does not exist. A malformed document is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TableError> {
        let path = path.into();
        let units = load_document(&path, Self::default_units)?;
        Ok(Self { path, units })
    }

    fn default_units() -> IndexMap<String, f64> {
        IndexMap::from([(BASE_UNIT.to_string(), 1.0)])
    }

    /// Register a unit from raw form input, overwriting an existing entry
    /// under the same name, and persist the table.
    ///
    /// The factor must parse as a finite number. The factor's sign is not
    /// checked.
    pub fn add_unit(&mut self, name: &str, factor: &str) -> Result<(String, f64), TableError> {
        let name = field::require_text("unit", name)?;
        let factor = field::parse_number("conversion rate", factor)?;

        self.units.insert(name.clone(), factor);
        self.save()?;
        tracing::debug!(unit = %name, factor, "unit registered");
        Ok((name, factor))
    }

    /// Unit names in insertion order (populates the adapter's unit
    /// selection).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.units.iter().map(|(name, factor)| (name.as_str(), *factor))
    }

    /// Conversion factor for `name`, if registered.
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.units.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn save(&self) -> Result<(), StorageError> {
        save_document(&self.path, &self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_in(dir: &tempfile::TempDir) -> UnitTable {
        UnitTable::open(dir.path().join("units.json")).unwrap()
    }

    #[test]
    fn fresh_table_has_the_base_unit() {
        let dir = tempfile::tempdir().unwrap();
        let table = open_in(&dir);

        assert_eq!(table.len(), 1);
        assert_eq!(table.factor(BASE_UNIT), Some(1.0));
    }

    #[test]
    fn add_unit_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open_in(&dir);

        table.add_unit("boxes", "12").unwrap();
        table.add_unit("pallets", "480").unwrap();

        let reloaded = open_in(&dir);
        assert_eq!(reloaded.factor("boxes"), Some(12.0));
        let names: Vec<_> = reloaded.names().collect();
        assert_eq!(names, ["pieces", "boxes", "pallets"]);
    }

    #[test]
    fn add_unit_overwrites_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open_in(&dir);

        table.add_unit("boxes", "12").unwrap();
        table.add_unit("boxes", "24").unwrap();

        assert_eq!(table.factor("boxes"), Some(24.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn add_unit_validates_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open_in(&dir);

        let err = table.add_unit("  ", "12").unwrap_err();
        assert!(matches!(err, TableError::Domain(DomainError::Validation { field: "unit", .. })));

        let err = table.add_unit("boxes", "a dozen").unwrap_err();
        assert!(matches!(
            err,
            TableError::Domain(DomainError::Validation { field: "conversion rate", .. })
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn factor_sign_is_not_checked() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = open_in(&dir);

        table.add_unit("weird", "-2").unwrap();
        assert_eq!(table.factor("weird"), Some(-2.0));
    }
}
