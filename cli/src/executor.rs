//! Command execution.

use anyhow::{bail, Result};
use pulse_core::Record;
use pulse_query::{FilterSpec, GroupBy, QueryEngine};
use serde_json::to_string_pretty;

use crate::args::{Cli, Command, FilterArgs, OutputFormat};
use crate::export::{aggregation_to_csv, kpis_to_csv, records_to_csv};
use crate::format::{
    format_aggregation, format_dashboard, format_kpis, format_records, format_top,
};

/// Turn the filter flags into a spec.
///
/// Omitted flags fall back to everything present in `records`. A single
/// date bound keeps the defaulted one on its far side, so only two explicit
/// bounds can form an inverted range. Returns `None` when there are no
/// records to select from.
pub fn resolve_filter(args: &FilterArgs, records: &[Record]) -> Option<FilterSpec> {
    let mut spec = FilterSpec::covering(records)?;

    if !args.locations.is_empty() {
        spec = spec.with_locations(args.locations.iter().cloned());
    }
    if !args.departments.is_empty() {
        spec = spec.with_departments(args.departments.iter().cloned());
    }

    let (from, to) = match (args.from, args.to) {
        (Some(from), Some(to)) => (from, to),
        (Some(from), None) => (from, spec.date_to.max(from)),
        (None, Some(to)) => (spec.date_from.min(to), to),
        (None, None) => (spec.date_from, spec.date_to),
    };
    Some(spec.with_date_range(from, to))
}

/// Run the selected command and return its rendered output.
pub fn execute(cli: &Cli, records: &[Record], engine: &QueryEngine) -> Result<String> {
    let Some(spec) = resolve_filter(&cli.filter, records) else {
        return Ok(match cli.format {
            OutputFormat::Text => "(no data)".to_string(),
            OutputFormat::Json => "null".to_string(),
            OutputFormat::Csv => String::new(),
        });
    };

    let command = cli.command.clone().unwrap_or(Command::Report);
    let output = match command {
        Command::Report => {
            let board = engine.dashboard(records, &spec)?;
            match cli.format {
                OutputFormat::Text => format_dashboard(&board),
                OutputFormat::Json => to_string_pretty(&board)?,
                OutputFormat::Csv => {
                    bail!("the report has no CSV form; use kpis, aggregate or export")
                }
            }
        }

        Command::Kpis => {
            let filtered = engine.apply_filter(records, &spec)?;
            let kpis = engine.compute_kpis(&filtered);
            match cli.format {
                OutputFormat::Text => format_kpis(&kpis),
                OutputFormat::Json => to_string_pretty(&kpis)?,
                OutputFormat::Csv => kpis_to_csv(&kpis)?,
            }
        }

        Command::Aggregate {
            by,
            metric,
            reducer,
            top,
        } => {
            let group_by = match by.as_slice() {
                [one] => GroupBy::One(*one),
                [first, second] => GroupBy::Pair(*first, *second),
                _ => bail!("--by takes one or two dimensions, got {}", by.len()),
            };
            let filtered = engine.apply_filter(records, &spec)?;
            let result = engine.aggregate_by(&filtered, group_by, metric, reducer)?;
            match (cli.format, top) {
                (OutputFormat::Text, Some(n)) => format_top(&result, n),
                (OutputFormat::Text, None) => format_aggregation(&result),
                (OutputFormat::Json, Some(n)) => to_string_pretty(&result.top_n(n))?,
                (OutputFormat::Json, None) => to_string_pretty(&result)?,
                (OutputFormat::Csv, Some(n)) => aggregation_to_csv(&result, &result.top_n(n))?,
                (OutputFormat::Csv, None) => aggregation_to_csv(&result, result.rows())?,
            }
        }

        Command::Export => {
            let filtered = engine.apply_filter(records, &spec)?;
            match cli.format {
                OutputFormat::Text => format_records(&filtered),
                OutputFormat::Json => to_string_pretty(&filtered)?,
                OutputFormat::Csv => records_to_csv(&filtered)?,
            }
        }
    };

    Ok(output)
}
