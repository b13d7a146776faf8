//! KPI scorecards.

use std::borrow::Borrow;

use pulse_core::{Metric, Record};
use serde::Serialize;
use tracing::debug;

use crate::aggregates::Accumulator;

/// Scalar summaries of a selection.
///
/// Every field is `None` when the selection is empty; a zero is always a
/// real zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KpiSummary {
    pub record_count: usize,
    pub avg_wait_time: Option<f64>,
    pub avg_treatment_cost: Option<f64>,
    pub avg_satisfaction: Option<f64>,
    pub total_appointments_available: Option<u64>,
}

impl KpiSummary {
    /// Returns true if no records contributed.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Compute the KPI scorecards over `records`.
///
/// Accepts owned records or the borrowed selection returned by
/// [`apply_filter`](crate::apply_filter).
pub fn compute_kpis<R: Borrow<Record>>(records: &[R]) -> KpiSummary {
    let mut wait = Accumulator::default();
    let mut cost = Accumulator::default();
    let mut satisfaction = Accumulator::default();
    let mut appointments: u64 = 0;

    for record in records {
        let record: &Record = record.borrow();
        wait.push(record.metric(Metric::WaitTimeMinutes));
        cost.push(record.metric(Metric::TreatmentCostUsd));
        satisfaction.push(record.metric(Metric::SatisfactionScore));
        appointments += u64::from(record.appointments_available());
    }

    let summary = KpiSummary {
        record_count: records.len(),
        avg_wait_time: wait.mean(),
        avg_treatment_cost: cost.mean(),
        avg_satisfaction: satisfaction.mean(),
        total_appointments_available: (!records.is_empty()).then_some(appointments),
    };

    debug!(records = summary.record_count, "computed kpis");
    summary
}
