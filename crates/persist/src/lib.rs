//! `stockbook-persist` — whole-document JSON persistence.
//!
//! Both stores serialize their entire mapping as one human-readable JSON
//! document and rewrite it after every mutation. There is no partial
//! update, no migration, and no file locking; a concurrent external writer
//! races (last writer wins).

pub mod document;

pub use document::{StorageError, load_document, save_document};
