//! Record file loading.
//!
//! Rows whose date cannot be parsed are dropped; any other invalid row
//! aborts the load.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pulse_core::{RawRecord, Record};
use tracing::{info, warn};

/// Records read from a file, plus how many rows were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub dropped: usize,
}

/// Load a JSON array of records from `path`.
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read record file {}", path.display()))?;
    parse_records(&source).with_context(|| format!("cannot load {}", path.display()))
}

/// Parse a JSON array of records.
pub fn parse_records(source: &str) -> Result<LoadedRecords> {
    let rows: Vec<RawRecord> =
        serde_json::from_str(source).context("expected a JSON array of record objects")?;

    let mut loaded = LoadedRecords::default();
    for (index, row) in rows.into_iter().enumerate() {
        match Record::try_from(row) {
            Ok(record) => loaded.records.push(record),
            Err(e) if e.is_invalid_date() => {
                warn!(row = index, error = %e, "dropping row with unparseable date");
                loaded.dropped += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("invalid record at row {}", index)),
        }
    }

    info!(
        loaded = loaded.records.len(),
        dropped = loaded.dropped,
        "records loaded"
    );
    Ok(loaded)
}
