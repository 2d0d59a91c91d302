//! Type conversion and string cleaning for raw CSV text.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CleanError {
    #[error("Column {column}: {value:?} is not an integer")]
    InvalidInt { column: String, value: String },
    #[error("Column {column}: {value:?} is not a number")]
    InvalidFloat { column: String, value: String },
}

/// Parse an integer, ignoring surrounding whitespace.
pub fn parse_int(column: &str, value: &str) -> Result<i64, CleanError> {
    value.trim().parse().map_err(|_| CleanError::InvalidInt {
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Parse a float, ignoring surrounding whitespace.
pub fn parse_float(column: &str, value: &str) -> Result<f64, CleanError> {
    value.trim().parse().map_err(|_| CleanError::InvalidFloat {
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Only the exact text `"true"` is true.
pub fn parse_bool(value: &str) -> bool {
    value == "true"
}

/// Strip surrounding whitespace and lowercase. Inner spacing is untouched.
pub fn clean_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Drop spaces and dashes from a phone number.
pub fn clean_phone(raw: &str) -> String {
    raw.replace(' ', "").replace('-', "")
}
