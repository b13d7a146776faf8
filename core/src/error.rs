//! Common error types for Pulse records.

use thiserror::Error;

/// Result type for record construction.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Date text is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {value:?}")]
    InvalidDate { value: String },

    /// A quantity that must be non-negative was negative.
    #[error("Negative value for {field}: {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// A bounded quantity fell outside its bounds.
    #[error("Value for {field} out of range [{min}, {max}]: {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinity in a numeric field.
    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    /// Category text was empty or whitespace.
    #[error("Empty category for {field}")]
    EmptyCategory { field: &'static str },

    /// Builder finished without a required field.
    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    /// Unrecognized field or reducer name.
    #[error("Unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}

impl CoreError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    pub fn negative_value(field: &'static str, value: f64) -> Self {
        Self::NegativeValue { field, value }
    }

    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    pub fn non_finite(field: &'static str) -> Self {
        Self::NonFinite { field }
    }

    pub fn empty_category(field: &'static str) -> Self {
        Self::EmptyCategory { field }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }

    /// Returns true if this error is about an unparseable date.
    ///
    /// Loaders drop such rows instead of failing the whole load.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}
