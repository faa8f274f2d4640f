//! Raw form-field parsing.
//!
//! Mutating operations receive their input as the strings the user typed.
//! These helpers turn them into domain values, naming the offending field
//! on failure so the adapter can point at the right input.

use crate::error::{DomainError, DomainResult};

/// A required free-text field: trimmed, must be non-empty.
pub fn require_text(field: &'static str, raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// A numeric field: trimmed, must parse as a finite number.
pub fn parse_number(field: &'static str, raw: &str) -> DomainResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| DomainError::validation(field, format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(DomainError::validation(field, "must be a finite number"));
    }
    Ok(value)
}

/// A quantity: numeric, finite, and not negative.
pub fn parse_quantity(field: &'static str, raw: &str) -> DomainResult<f64> {
    let value = parse_number(field, raw)?;
    if value < 0.0 {
        return Err(DomainError::validation(field, "must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims_input() {
        assert_eq!(require_text("name", "  Widget  ").unwrap(), "Widget");
    }

    #[test]
    fn require_text_rejects_blank() {
        let err = require_text("category", "   ").unwrap_err();
        assert_eq!(err.field(), Some("category"));
    }

    #[test]
    fn parse_number_accepts_decimals_and_sign() {
        assert_eq!(parse_number("price", "2.5").unwrap(), 2.5);
        assert_eq!(parse_number("price", "-3").unwrap(), -3.0);
        assert_eq!(parse_number("price", " 10 ").unwrap(), 10.0);
    }

    #[test]
    fn parse_number_rejects_garbage_and_non_finite() {
        assert!(parse_number("price", "abc").is_err());
        assert!(parse_number("price", "").is_err());
        assert!(parse_number("price", "inf").is_err());
        assert!(parse_number("price", "NaN").is_err());
    }

    #[test]
    fn parse_quantity_rejects_negative() {
        let err = parse_quantity("quantity", "-1").unwrap_err();
        assert_eq!(err.field(), Some("quantity"));
        assert_eq!(parse_quantity("quantity", "0").unwrap(), 0.0);
    }
}
