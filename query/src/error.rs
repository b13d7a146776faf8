//! Query error types.

use chrono::NaiveDate;
use pulse_core::Dimension;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur during query execution.
///
/// An empty selection is never an error; it yields empty results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Duplicate group key: {dimension} named twice")]
    DuplicateGroupKey { dimension: Dimension },

    #[error("Not a pivot: grouping by {group_by} has a single key")]
    NotAPivot { group_by: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl QueryError {
    pub fn invalid_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self::InvalidRange { from, to }
    }

    pub fn duplicate_group_key(dimension: Dimension) -> Self {
        Self::DuplicateGroupKey { dimension }
    }

    pub fn not_a_pivot(group_by: impl ToString) -> Self {
        Self::NotAPivot {
            group_by: group_by.to_string(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true if the caller can fix this by changing its input.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::DuplicateGroupKey { .. } | Self::InvalidConfig { .. }
        )
    }
}
