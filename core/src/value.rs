//! Dimension values.
//!
//! A `DimValue` is what a record holds in one of its categorical
//! dimensions. Values are totally ordered and hashable so they can key
//! grouped aggregations deterministically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of a dimension on a record.
///
/// Ordering: dates sort before text; dates chronologically, text
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimValue {
    /// Calendar date.
    Date(NaiveDate),
    /// Category text (location, department).
    Text(String),
}

impl DimValue {
    /// Returns true if this is a date value.
    pub fn is_date(&self) -> bool {
        matches!(self, DimValue::Date(_))
    }

    /// Returns true if this is a text value.
    pub fn is_text(&self) -> bool {
        matches!(self, DimValue::Text(_))
    }

    /// Get as date if this is a Date value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DimValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DimValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for DimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DimValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<NaiveDate> for DimValue {
    fn from(d: NaiveDate) -> Self {
        DimValue::Date(d)
    }
}

impl From<String> for DimValue {
    fn from(s: String) -> Self {
        DimValue::Text(s)
    }
}

impl From<&str> for DimValue {
    fn from(s: &str) -> Self {
        DimValue::Text(s.to_string())
    }
}
