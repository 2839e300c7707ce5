//! Input validation at the boundary between user input and the engine.
//!
//! Negative, non-finite and non-numeric values are rejected here with
//! [`Error::InvalidInput`]; they never reach the pure computation functions.

use crate::errors::{Error, Result};

/// Accepts a finite value that is zero or greater.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(field, value))
    }
}

/// Accepts a finite value strictly greater than zero.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(field, value))
    }
}

/// Trims a record name and rejects it when nothing is left.
pub fn ensure_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid("name", name));
    }
    Ok(trimmed.to_string())
}

/// Parses a user-entered number. A comma is accepted as decimal separator.
fn parse_number(field: &'static str, input: &str) -> Result<f64> {
    let normalized = input.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| Error::invalid(field, input))
}

/// Parses a monetary amount or quantity (`"4,50"`, `"12.2"`), rejecting
/// negative and non-numeric input.
pub fn parse_amount(field: &'static str, input: &str) -> Result<f64> {
    let value = parse_number(field, input)?;
    ensure_non_negative(field, value).map_err(|_| Error::invalid(field, input))
}

/// Parses a percentage where `8` (or `"8%"`) means 8 %. No upper bound is
/// enforced.
pub fn parse_percent(field: &'static str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    parse_amount(field, trimmed.strip_suffix('%').unwrap_or(trimmed))
}
