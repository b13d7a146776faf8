//! Pivot tables for heatmap panels.

use std::collections::BTreeSet;

use pulse_core::{DimValue, Dimension, Metric};
use serde::Serialize;

use crate::{AggregationResult, GroupBy, GroupKey, QueryError, QueryResult, Reducer};

/// A dense grid over a two-key aggregation.
///
/// Rows are labelled by the first grouping dimension, columns by the
/// second. Combinations with no records are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotTable {
    pub row_dimension: Dimension,
    pub column_dimension: Dimension,
    pub metric: Metric,
    pub reducer: Reducer,
    pub rows: Vec<DimValue>,
    pub columns: Vec<DimValue>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl PivotTable {
    /// Returns true if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at the given labels.
    pub fn cell(&self, row: &DimValue, column: &DimValue) -> Option<f64> {
        let r = self.rows.binary_search(row).ok()?;
        let c = self.columns.binary_search(column).ok()?;
        self.cells[r][c]
    }

    /// Smallest and largest populated cell, for colour scaling.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }
}

impl TryFrom<&AggregationResult> for PivotTable {
    type Error = QueryError;

    fn try_from(result: &AggregationResult) -> QueryResult<Self> {
        let (row_dimension, column_dimension) = match result.group_by() {
            GroupBy::Pair(a, b) => (a, b),
            single => return Err(QueryError::not_a_pivot(single)),
        };

        let mut row_labels = BTreeSet::new();
        let mut column_labels = BTreeSet::new();
        for row in result.rows() {
            if let GroupKey::Pair(r, c) = &row.key {
                row_labels.insert(r.clone());
                column_labels.insert(c.clone());
            }
        }
        let rows: Vec<DimValue> = row_labels.into_iter().collect();
        let columns: Vec<DimValue> = column_labels.into_iter().collect();

        let mut cells = vec![vec![None; columns.len()]; rows.len()];
        for row in result.rows() {
            if let GroupKey::Pair(r, c) = &row.key {
                if let (Ok(ri), Ok(ci)) = (rows.binary_search(r), columns.binary_search(c)) {
                    cells[ri][ci] = Some(row.value);
                }
            }
        }

        Ok(Self {
            row_dimension,
            column_dimension,
            metric: result.metric(),
            reducer: result.reducer(),
            rows,
            columns,
            cells,
        })
    }
}
