//! Record selection.
//!
//! A `FilterSpec` names the locations, departments and inclusive date range
//! a caller wants to see. Empty sets select nothing; use
//! [`FilterSpec::covering`] for the "everything selected" default.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use pulse_core::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{QueryError, QueryResult};

/// User-chosen constraints applied before any aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub locations: BTreeSet<String>,
    pub departments: BTreeSet<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl FilterSpec {
    /// Create a validated spec.
    pub fn new<L, D>(
        locations: L,
        departments: D,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> QueryResult<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let spec = Self {
            locations: locations.into_iter().map(Into::into).collect(),
            departments: departments.into_iter().map(Into::into).collect(),
            date_from,
            date_to,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// The filter selecting every location, department and date present in
    /// `records`. `None` when there are no records to span.
    pub fn covering(records: &[Record]) -> Option<Self> {
        let date_from = records.iter().map(Record::date).min()?;
        let date_to = records.iter().map(Record::date).max()?;
        Some(Self {
            locations: records.iter().map(|r| r.location().to_string()).collect(),
            departments: records.iter().map(|r| r.department().to_string()).collect(),
            date_from,
            date_to,
        })
    }

    /// Check `date_from <= date_to`.
    pub fn validate(&self) -> QueryResult<()> {
        if self.date_from > self.date_to {
            return Err(QueryError::invalid_range(self.date_from, self.date_to));
        }
        Ok(())
    }

    /// Replace the location selection.
    pub fn with_locations<I>(mut self, locations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the department selection.
    pub fn with_departments<I>(mut self, departments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the date range. Not validated until the filter is applied.
    pub fn with_date_range(mut self, date_from: NaiveDate, date_to: NaiveDate) -> Self {
        self.date_from = date_from;
        self.date_to = date_to;
        self
    }

    /// Whether a single record passes every constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.locations.contains(record.location())
            && self.departments.contains(record.department())
            && record.date() >= self.date_from
            && record.date() <= self.date_to
    }
}

/// Select the records that satisfy `spec`, preserving input order.
///
/// Fails with [`QueryError::InvalidRange`] before touching any record when
/// the range is inverted.
pub fn apply_filter<'a>(records: &'a [Record], spec: &FilterSpec) -> QueryResult<Vec<&'a Record>> {
    spec.validate()?;

    let selected: Vec<&Record> = records.iter().filter(|r| spec.matches(r)).collect();

    debug!(
        input = records.len(),
        selected = selected.len(),
        date_from = %spec.date_from,
        date_to = %spec.date_to,
        "applied filter"
    );

    Ok(selected)
}
