//! Line-oriented record encoding.
//!
//! Every stored record is one line of single-token fields joined by a space, in a
//! fixed order. Encoding refuses values that could not be read back (empty or
//! containing whitespace); decoding requires the exact field count and parses numeric
//! fields explicitly.

use std::str::FromStr;
use thiserror::Error;

/// Errors produced while encoding or decoding a stored line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordFormatError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field `{field}` is empty")]
    EmptyField { field: &'static str },

    #[error("field `{field}` contains whitespace: {value:?}")]
    Whitespace { field: &'static str, value: String },

    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A record with an explicit single-line text representation.
pub trait LineRecord: Sized {
    /// Field names in stored order.
    const FIELDS: &'static [&'static str];

    /// Field values in the order of [`LineRecord::FIELDS`].
    fn to_fields(&self) -> Vec<String>;

    /// Builds the record from exactly `FIELDS.len()` tokens.
    fn from_fields(fields: &[&str]) -> Result<Self, RecordFormatError>;

    fn to_line(&self) -> Result<String, RecordFormatError> {
        let fields = self.to_fields();
        for (field, value) in Self::FIELDS.iter().copied().zip(&fields) {
            if value.is_empty() {
                return Err(RecordFormatError::EmptyField { field });
            }
            if value.chars().any(char::is_whitespace) {
                return Err(RecordFormatError::Whitespace {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(fields.join(" "))
    }

    fn from_line(line: &str) -> Result<Self, RecordFormatError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != Self::FIELDS.len() {
            return Err(RecordFormatError::FieldCount {
                expected: Self::FIELDS.len(),
                found: fields.len(),
            });
        }
        Self::from_fields(&fields)
    }
}

/// Parses a numeric field, naming the field on failure.
pub fn parse_number<N: FromStr>(field: &'static str, value: &str) -> Result<N, RecordFormatError> {
    value.parse().map_err(|_| RecordFormatError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
