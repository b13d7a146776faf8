//! Query engine.

use std::borrow::Borrow;

use pulse_core::{Metric, Record};
use tracing::{debug, info};

use crate::dashboard;
use crate::{
    aggregate_by, apply_filter, compute_kpis, AggregationResult, Dashboard, DashboardConfig,
    FilterSpec, GroupBy, KpiSummary, QueryResult, Reducer,
};

/// Executes filters and aggregations over an in-memory record set.
///
/// The engine holds only configuration; every call is a pure function of
/// its arguments, so one engine can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: DashboardConfig,
}

impl QueryEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a validated configuration.
    pub fn with_config(config: DashboardConfig) -> QueryResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Select the records matching `spec`.
    pub fn apply_filter<'a>(
        &self,
        records: &'a [Record],
        spec: &FilterSpec,
    ) -> QueryResult<Vec<&'a Record>> {
        apply_filter(records, spec)
    }

    /// KPI scorecards over a selection.
    pub fn compute_kpis<R: Borrow<Record>>(&self, records: &[R]) -> KpiSummary {
        compute_kpis(records)
    }

    /// Grouped reduction over a selection.
    pub fn aggregate_by<R: Borrow<Record>>(
        &self,
        records: &[R],
        group_by: GroupBy,
        metric: Metric,
        reducer: Reducer,
    ) -> QueryResult<AggregationResult> {
        aggregate_by(records, group_by, metric, reducer)
    }

    /// Filter once and build every dashboard panel from the selection.
    pub fn dashboard<'a>(
        &self,
        records: &'a [Record],
        spec: &FilterSpec,
    ) -> QueryResult<Dashboard<'a>> {
        let filtered = apply_filter(records, spec)?;
        debug!(selected = filtered.len(), top_n = self.config.top_n, "building dashboard");

        let board = dashboard::build(filtered, &self.config)?;
        info!(
            records = records.len(),
            selected = board.filtered.len(),
            "dashboard ready"
        );
        Ok(board)
    }
}
