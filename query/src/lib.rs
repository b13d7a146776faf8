//! Pulse Query
//!
//! Filter and aggregate clinic performance records.
//!
//! Responsibilities:
//! - Select records by location, department and date range
//! - Compute KPI scorecards over a selection
//! - Group a selection by one or two dimensions and reduce a metric
//! - Shape two-key groupings into pivot tables
//! - Assemble the standard dashboard panels

mod aggregates;
mod config;
mod dashboard;
mod engine;
mod error;
mod filter;
mod kpis;
mod pivot;

pub use aggregates::{aggregate_by, AggregateRow, AggregationResult, GroupBy, GroupKey, Reducer};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, ShareRow};
pub use engine::QueryEngine;
pub use error::{QueryError, QueryResult};
pub use filter::{apply_filter, FilterSpec};
pub use kpis::{compute_kpis, KpiSummary};
pub use pivot::PivotTable;
