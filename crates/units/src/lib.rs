//! `stockbook-units` — user-extensible units of measure.
//!
//! A unit is a name plus a conversion factor relative to the base unit.
//! Factors are recorded and shown, but nothing in the system converts
//! with them; they are carried for the day something does.

pub mod table;

pub use table::{BASE_UNIT, TableError, UNITS_FILE, UnitTable};
