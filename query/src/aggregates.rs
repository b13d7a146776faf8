//! Grouped aggregation.
//!
//! This module groups records by one or two dimensions and reduces a
//! metric (MEAN or SUM) over each group. Only groups with at least one
//! contributing record are materialized.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use pulse_core::{CoreError, DimValue, Dimension, Metric, Record};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{QueryError, QueryResult};

/// Reduction applied to the metric values of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    #[serde(alias = "avg")]
    Mean,
    Sum,
}

impl Reducer {
    pub fn name(self) -> &'static str {
        match self {
            Reducer::Mean => "mean",
            Reducer::Sum => "sum",
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reducer {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" | "avg" => Ok(Reducer::Mean),
            "sum" => Ok(Reducer::Sum),
            _ => Err(CoreError::unknown_name("reducer", s)),
        }
    }
}

/// The dimensions a result is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupBy {
    One(Dimension),
    /// Row dimension first, column dimension second.
    Pair(Dimension, Dimension),
}

impl GroupBy {
    /// Dimensions in key order.
    pub fn dimensions(&self) -> Vec<Dimension> {
        match *self {
            GroupBy::One(d) => vec![d],
            GroupBy::Pair(a, b) => vec![a, b],
        }
    }

    /// Whether this grouping yields two-part keys.
    pub fn is_pair(&self) -> bool {
        matches!(self, GroupBy::Pair(..))
    }

    fn validate(&self) -> QueryResult<()> {
        match *self {
            GroupBy::Pair(a, b) if a == b => Err(QueryError::duplicate_group_key(a)),
            _ => Ok(()),
        }
    }

    fn key_of(&self, record: &Record) -> GroupKey {
        match *self {
            GroupBy::One(d) => GroupKey::One(record.dimension(d)),
            GroupBy::Pair(a, b) => GroupKey::Pair(record.dimension(a), record.dimension(b)),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupBy::One(d) => write!(f, "{}", d),
            GroupBy::Pair(a, b) => write!(f, "{} x {}", a, b),
        }
    }
}

/// A distinct key combination present in the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    One(DimValue),
    Pair(DimValue, DimValue),
}

impl GroupKey {
    /// First key part (the only part for single-key groupings).
    pub fn first(&self) -> &DimValue {
        match self {
            GroupKey::One(v) | GroupKey::Pair(v, _) => v,
        }
    }

    /// Second key part, if any.
    pub fn second(&self) -> Option<&DimValue> {
        match self {
            GroupKey::One(_) => None,
            GroupKey::Pair(_, v) => Some(v),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::One(v) => write!(f, "{}", v),
            GroupKey::Pair(a, b) => write!(f, "{} / {}", a, b),
        }
    }
}

/// One group of an aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub key: GroupKey,
    pub value: f64,
    /// Number of contributing records, always at least one.
    pub count: usize,
}

/// The outcome of [`aggregate_by`].
///
/// Rows are held in ascending key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    group_by: GroupBy,
    metric: Metric,
    reducer: Reducer,
    rows: Vec<AggregateRow>,
}

impl AggregationResult {
    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn reducer(&self) -> Reducer {
        self.reducer
    }

    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<AggregateRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a group by key.
    pub fn get(&self, key: &GroupKey) -> Option<&AggregateRow> {
        self.rows
            .binary_search_by(|row| row.key.cmp(key))
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Aggregated value of a group, if the group exists.
    pub fn value(&self, key: &GroupKey) -> Option<f64> {
        self.get(key).map(|row| row.value)
    }

    /// Sum of all group values.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// The `n` groups with the largest values.
    ///
    /// Exact ties are broken by ascending key so the selection is stable.
    pub fn top_n(&self, n: usize) -> Vec<AggregateRow> {
        let mut ranked = self.rows.clone();
        ranked.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.key.cmp(&b.key))
        });
        ranked.truncate(n);
        ranked
    }
}

/// Running sum and count for one group.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    fn reduce(&self, reducer: Reducer) -> Option<f64> {
        match reducer {
            Reducer::Sum => (self.count > 0).then_some(self.sum),
            Reducer::Mean => self.mean(),
        }
    }
}

/// Group `records` and reduce `metric` within each group.
pub fn aggregate_by<R: Borrow<Record>>(
    records: &[R],
    group_by: GroupBy,
    metric: Metric,
    reducer: Reducer,
) -> QueryResult<AggregationResult> {
    group_by.validate()?;

    let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();
    for record in records {
        let record: &Record = record.borrow();
        groups
            .entry(group_by.key_of(record))
            .or_default()
            .push(record.metric(metric));
    }

    let rows: Vec<AggregateRow> = groups
        .into_iter()
        .filter_map(|(key, acc)| {
            acc.reduce(reducer).map(|value| AggregateRow {
                key,
                value,
                count: acc.count,
            })
        })
        .collect();

    debug!(
        records = records.len(),
        groups = rows.len(),
        %group_by,
        %metric,
        %reducer,
        "aggregated"
    );

    Ok(AggregationResult {
        group_by,
        metric,
        reducer,
        rows,
    })
}
