//! Journal parsing errors
//!
//! Every variant carries the 1-based ordinal of the entry that failed so the
//! message can point the author at the right place in a long journal.

use thiserror::Error;

use super::date::DateField;

/// Broad category of a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidMetadata,
    MissingRequiredField,
    InvalidFieldFormat,
    InvalidDate,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The header block is not well-formed YAML, or not a mapping
    #[error("Invalid YAML in entry {entry}: {message}")]
    InvalidMetadata { entry: usize, message: String },

    /// A date field is absent and cannot be inherited
    #[error("Entry {entry}: {reason}")]
    MissingRequiredField {
        entry: usize,
        field: DateField,
        reason: &'static str,
    },

    /// A date field holds a value that cannot be read as a number
    #[error("Entry {entry}: invalid {field} format: {value}")]
    InvalidFieldFormat {
        entry: usize,
        field: DateField,
        value: String,
    },

    /// The resolved fields do not name a real calendar day
    #[error("Entry {entry}: invalid date ({year}-{month}-{day}): {reason}")]
    InvalidDate {
        entry: usize,
        year: i64,
        month: i64,
        day: i64,
        reason: &'static str,
    },
}

impl ParseError {
    /// Returns the category of this error
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::InvalidMetadata { .. } => ParseErrorKind::InvalidMetadata,
            ParseError::MissingRequiredField { .. } => ParseErrorKind::MissingRequiredField,
            ParseError::InvalidFieldFormat { .. } => ParseErrorKind::InvalidFieldFormat,
            ParseError::InvalidDate { .. } => ParseErrorKind::InvalidDate,
        }
    }

    /// Returns the 1-based ordinal of the failing entry
    pub fn entry(&self) -> usize {
        match self {
            ParseError::InvalidMetadata { entry, .. }
            | ParseError::MissingRequiredField { entry, .. }
            | ParseError::InvalidFieldFormat { entry, .. }
            | ParseError::InvalidDate { entry, .. } => *entry,
        }
    }

    /// Returns the offending date field, when one applies
    pub fn field(&self) -> Option<DateField> {
        match self {
            ParseError::MissingRequiredField { field, .. }
            | ParseError::InvalidFieldFormat { field, .. } => Some(*field),
            ParseError::InvalidMetadata { .. } | ParseError::InvalidDate { .. } => None,
        }
    }
}
