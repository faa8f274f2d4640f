//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the stores
//! (no I/O concerns): the error model and raw form-field parsing.

pub mod error;
pub mod field;

pub use error::{DomainError, DomainResult};
