//! Pulse command-line front end.
//!
//! Loads a record file, resolves the user's filter flags and renders
//! dashboard panels as text tables, JSON or CSV.
//!
//! - `args`: command-line definition
//! - `loader`: record file loading
//! - `executor`: command execution
//! - `format`: output formatting utilities
//! - `export`: CSV output

mod args;
mod executor;
mod export;
mod format;
mod loader;

pub use args::{Cli, Command, FilterArgs, OutputFormat};
pub use executor::{execute, resolve_filter};
pub use export::{aggregation_to_csv, kpis_to_csv, records_to_csv};
pub use format::{
    format_aggregation, format_dashboard, format_kpis, format_number, format_pivot, format_records,
    format_top,
};
pub use loader::{load_records, parse_records, LoadedRecords};
