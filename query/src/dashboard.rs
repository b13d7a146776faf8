//! Standard dashboard panels.
//!
//! A `Dashboard` bundles every summary the clinic overview page shows,
//! computed from one filtered selection.

use pulse_core::{Dimension, Metric, Record};
use serde::Serialize;

use crate::{
    aggregate_by, compute_kpis, AggregateRow, AggregationResult, DashboardConfig, GroupBy,
    GroupKey, KpiSummary, PivotTable, QueryResult, Reducer,
};

/// A group's value with its fraction of the total, for pie charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRow {
    pub key: GroupKey,
    pub value: f64,
    /// `None` when the total is zero.
    pub share: Option<f64>,
}

/// Every panel of the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard<'a> {
    pub kpis: KpiSummary,
    pub wait_time_trend: AggregationResult,
    pub satisfaction_trend: AggregationResult,
    pub cost_by_department: AggregationResult,
    pub satisfaction_by_department: AggregationResult,
    pub appointments_by_location: Vec<ShareRow>,
    pub top_departments: Vec<AggregateRow>,
    pub appointments_heatmap: PivotTable,
    pub wait_time_heatmap: PivotTable,
    /// The selection itself, for tabular preview and export.
    pub filtered: Vec<&'a Record>,
}

impl Dashboard<'_> {
    /// Returns true if the selection matched no records.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

pub(crate) fn build<'a>(
    filtered: Vec<&'a Record>,
    config: &DashboardConfig,
) -> QueryResult<Dashboard<'a>> {
    let by = |group_by, metric, reducer| aggregate_by(&filtered, group_by, metric, reducer);

    let heatmap_keys = GroupBy::Pair(Dimension::Department, Dimension::Location);
    let appointments_heatmap = PivotTable::try_from(&by(
        heatmap_keys,
        Metric::AppointmentsAvailable,
        config.heatmap_reducer,
    )?)?;
    let wait_time_heatmap =
        PivotTable::try_from(&by(heatmap_keys, Metric::WaitTimeMinutes, Reducer::Mean)?)?;

    let appointments_by_location = shares(&by(
        GroupBy::One(Dimension::Location),
        Metric::AppointmentsAvailable,
        Reducer::Sum,
    )?);

    let top_departments = by(
        GroupBy::One(Dimension::Department),
        Metric::AppointmentsAvailable,
        Reducer::Sum,
    )?
    .top_n(config.top_n);

    Ok(Dashboard {
        kpis: compute_kpis(&filtered),
        wait_time_trend: by(
            GroupBy::One(Dimension::Date),
            Metric::WaitTimeMinutes,
            Reducer::Mean,
        )?,
        satisfaction_trend: by(
            GroupBy::One(Dimension::Date),
            Metric::SatisfactionScore,
            Reducer::Mean,
        )?,
        cost_by_department: by(
            GroupBy::One(Dimension::Department),
            Metric::TreatmentCostUsd,
            Reducer::Mean,
        )?,
        satisfaction_by_department: by(
            GroupBy::One(Dimension::Department),
            Metric::SatisfactionScore,
            Reducer::Mean,
        )?,
        appointments_by_location,
        top_departments,
        appointments_heatmap,
        wait_time_heatmap,
        filtered,
    })
}

fn shares(result: &AggregationResult) -> Vec<ShareRow> {
    let total = result.total();
    result
        .rows()
        .iter()
        .map(|row| ShareRow {
            key: row.key.clone(),
            value: row.value,
            share: (total > 0.0).then(|| row.value / total),
        })
        .collect()
}
