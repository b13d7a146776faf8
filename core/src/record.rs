//! Clinic performance records.
//!
//! A `Record` is one row of the performance log: a date, a location, a
//! department and four measurements. Records are immutable once built and
//! every construction path validates its fields.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, DimValue, Dimension, Metric};

/// Upper bound of the satisfaction scale.
pub const MAX_SATISFACTION: f64 = 5.0;

/// One validated row of clinic performance data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    date: NaiveDate,
    location: String,
    department: String,
    wait_time_minutes: f64,
    treatment_cost_usd: f64,
    satisfaction_score: f64,
    appointments_available: u32,
}

impl Record {
    /// Start building a record.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn wait_time_minutes(&self) -> f64 {
        self.wait_time_minutes
    }

    pub fn treatment_cost_usd(&self) -> f64 {
        self.treatment_cost_usd
    }

    pub fn satisfaction_score(&self) -> f64 {
        self.satisfaction_score
    }

    pub fn appointments_available(&self) -> u32 {
        self.appointments_available
    }

    /// Value of a dimension on this record.
    pub fn dimension(&self, dim: Dimension) -> DimValue {
        match dim {
            Dimension::Date => DimValue::Date(self.date),
            Dimension::Location => DimValue::Text(self.location.clone()),
            Dimension::Department => DimValue::Text(self.department.clone()),
        }
    }

    /// Value of a metric on this record, widened to `f64`.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::WaitTimeMinutes => self.wait_time_minutes,
            Metric::TreatmentCostUsd => self.treatment_cost_usd,
            Metric::SatisfactionScore => self.satisfaction_score,
            Metric::AppointmentsAvailable => f64::from(self.appointments_available),
        }
    }
}

/// Builder for [`Record`]. `build` validates every field.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    date: Option<NaiveDate>,
    location: Option<String>,
    department: Option<String>,
    wait_time_minutes: Option<f64>,
    treatment_cost_usd: Option<f64>,
    satisfaction_score: Option<f64>,
    appointments_available: Option<u32>,
}

impl RecordBuilder {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn wait_time_minutes(mut self, minutes: f64) -> Self {
        self.wait_time_minutes = Some(minutes);
        self
    }

    pub fn treatment_cost_usd(mut self, usd: f64) -> Self {
        self.treatment_cost_usd = Some(usd);
        self
    }

    pub fn satisfaction_score(mut self, score: f64) -> Self {
        self.satisfaction_score = Some(score);
        self
    }

    pub fn appointments_available(mut self, count: u32) -> Self {
        self.appointments_available = Some(count);
        self
    }

    /// Validate and produce the record.
    pub fn build(self) -> CoreResult<Record> {
        let date = self.date.ok_or_else(|| CoreError::missing_field("date"))?;
        let location = category(
            "location",
            self.location
                .ok_or_else(|| CoreError::missing_field("location"))?,
        )?;
        let department = category(
            "department",
            self.department
                .ok_or_else(|| CoreError::missing_field("department"))?,
        )?;
        let wait_time_minutes = non_negative(
            "wait_time_minutes",
            self.wait_time_minutes
                .ok_or_else(|| CoreError::missing_field("wait_time_minutes"))?,
        )?;
        let treatment_cost_usd = non_negative(
            "treatment_cost_usd",
            self.treatment_cost_usd
                .ok_or_else(|| CoreError::missing_field("treatment_cost_usd"))?,
        )?;
        let satisfaction_score = bounded(
            "satisfaction_score",
            self.satisfaction_score
                .ok_or_else(|| CoreError::missing_field("satisfaction_score"))?,
            0.0,
            MAX_SATISFACTION,
        )?;
        let appointments_available = self
            .appointments_available
            .ok_or_else(|| CoreError::missing_field("appointments_available"))?;

        Ok(Record {
            date,
            location,
            department,
            wait_time_minutes,
            treatment_cost_usd,
            satisfaction_score,
            appointments_available,
        })
    }
}

/// Unvalidated wire form of a record.
///
/// Accepts both the snake_case field names and the column headers of the
/// clinic performance CSV export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "Date")]
    pub date: String,
    #[serde(alias = "Location")]
    pub location: String,
    #[serde(alias = "Department")]
    pub department: String,
    #[serde(alias = "Avg_Wait_Time_Min")]
    pub wait_time_minutes: f64,
    #[serde(alias = "Avg_Treatment_Cost_USD")]
    pub treatment_cost_usd: f64,
    #[serde(alias = "Patient_Satisfaction_Score")]
    pub satisfaction_score: f64,
    #[serde(alias = "Appointments_Available")]
    pub appointments_available: u32,
}

impl TryFrom<RawRecord> for Record {
    type Error = CoreError;

    fn try_from(raw: RawRecord) -> CoreResult<Self> {
        Record::builder()
            .date(parse_date(&raw.date)?)
            .location(raw.location)
            .department(raw.department)
            .wait_time_minutes(raw.wait_time_minutes)
            .treatment_cost_usd(raw.treatment_cost_usd)
            .satisfaction_score(raw.satisfaction_score)
            .appointments_available(raw.appointments_available)
            .build()
    }
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time of day (which is
/// discarded).
pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| CoreError::invalid_date(s))
}

fn category(field: &'static str, value: String) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::empty_category(field));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

fn non_negative(field: &'static str, value: f64) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::non_finite(field));
    }
    if value < 0.0 {
        return Err(CoreError::negative_value(field, value));
    }
    Ok(value)
}

fn bounded(field: &'static str, value: f64, min: f64, max: f64) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::non_finite(field));
    }
    if value < min || value > max {
        return Err(CoreError::out_of_range(field, value, min, max));
    }
    Ok(value)
}
