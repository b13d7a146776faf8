//! Field identifiers.
//!
//! Dimensions are the categorical fields a record can be grouped by;
//! metrics are the numeric fields that get reduced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A categorical field usable as a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Date,
    Location,
    #[serde(alias = "dept")]
    Department,
}

impl Dimension {
    /// All dimensions, in declaration order.
    pub const ALL: [Dimension; 3] = [Dimension::Date, Dimension::Location, Dimension::Department];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Date => "date",
            Dimension::Location => "location",
            Dimension::Department => "department",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Dimension::Date),
            "location" => Ok(Dimension::Location),
            "department" | "dept" => Ok(Dimension::Department),
            _ => Err(CoreError::unknown_name("dimension", s)),
        }
    }
}

/// A numeric field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[serde(alias = "wait")]
    WaitTimeMinutes,
    #[serde(alias = "cost")]
    TreatmentCostUsd,
    #[serde(alias = "satisfaction")]
    SatisfactionScore,
    #[serde(alias = "appointments")]
    AppointmentsAvailable,
}

impl Metric {
    /// All metrics, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::WaitTimeMinutes,
        Metric::TreatmentCostUsd,
        Metric::SatisfactionScore,
        Metric::AppointmentsAvailable,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::WaitTimeMinutes => "wait_time_minutes",
            Metric::TreatmentCostUsd => "treatment_cost_usd",
            Metric::SatisfactionScore => "satisfaction_score",
            Metric::AppointmentsAvailable => "appointments_available",
        }
    }

    /// Short human label for table headers.
    pub fn label(self) -> &'static str {
        match self {
            Metric::WaitTimeMinutes => "Wait Time (min)",
            Metric::TreatmentCostUsd => "Cost (USD)",
            Metric::SatisfactionScore => "Satisfaction Score",
            Metric::AppointmentsAvailable => "Appointments Available",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wait_time_minutes" | "wait" => Ok(Metric::WaitTimeMinutes),
            "treatment_cost_usd" | "cost" => Ok(Metric::TreatmentCostUsd),
            "satisfaction_score" | "satisfaction" => Ok(Metric::SatisfactionScore),
            "appointments_available" | "appointments" => Ok(Metric::AppointmentsAvailable),
            _ => Err(CoreError::unknown_name("metric", s)),
        }
    }
}
