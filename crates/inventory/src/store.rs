//! The inventory store.

use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;

use stockbook_core::DomainError;
use stockbook_persist::{StorageError, load_document, save_document};

use crate::item::{Item, ItemDraft, ItemPatch};

/// Inventory document, relative to the working directory.
pub const INVENTORY_FILE: &str = "inventory.json";

/// Quantities strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

/// Error from a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The full collection of inventory records, in insertion order.
///
/// Single-owner and synchronous: every mutation validates, updates the
/// mapping, then rewrites the whole document before returning. When the
/// save fails the in-memory change has already happened — callers must
/// treat it as visible for this session only.
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    items: IndexMap<String, Item>,
}

impl InventoryStore {
    /// Load the store at `path`. A missing document is a first run and
    /// yields an empty store; a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let items = load_document(&path, IndexMap::new)?;
        Ok(Self { path, items })
    }

    /// Insert the record described by a form submission and persist.
    ///
    /// An existing record under the same name is replaced wholesale.
    /// Adding an existing name is the edit-in-place path, so there is no
    /// duplicate-name error.
    pub fn upsert(&mut self, draft: &ItemDraft) -> Result<Item, StoreError> {
        let (name, item) = draft.validate()?;
        tracing::debug!(item = %name, quantity = item.quantity, "record upserted");
        self.items.insert(name, item.clone());
        self.save()?;
        Ok(item)
    }

    /// Apply a partial update to an existing record and persist.
    ///
    /// Provided fields are parsed before anything is applied, so a failed
    /// update leaves the record exactly as it was.
    pub fn update(&mut self, name: &str, patch: &ItemPatch) -> Result<Item, StoreError> {
        let item = self
            .items
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(name))?;
        patch.apply_to(item)?;
        let updated = item.clone();
        tracing::debug!(item = %name, "record updated");
        self.save()?;
        Ok(updated)
    }

    /// Remove a record and persist, returning the removed record.
    pub fn remove(&mut self, name: &str) -> Result<Item, StoreError> {
        let item = self
            .items
            .shift_remove(name)
            .ok_or_else(|| DomainError::not_found(name))?;
        tracing::debug!(item = %name, "record removed");
        self.save()?;
        Ok(item)
    }

    /// Look up one record by exact name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.items.iter().map(|(name, item)| (name.as_str(), item))
    }

    /// Records whose name contains `term`, case-insensitively, in store
    /// order. A blank term degenerates to the full listing.
    pub fn search<'a>(&'a self, term: &str) -> Vec<(&'a str, &'a Item)> {
        let term = term.trim().to_lowercase();
        self.iter()
            .filter(|(name, _)| term.is_empty() || name.to_lowercase().contains(&term))
            .collect()
    }

    /// Records with quantity strictly below `threshold`, in store order.
    pub fn low_stock(&self, threshold: f64) -> Vec<(&str, &Item)> {
        self.iter()
            .filter(|(_, item)| item.quantity < threshold)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn save(&self) -> Result<(), StorageError> {
        save_document(&self.path, &self.items)
    }
}
