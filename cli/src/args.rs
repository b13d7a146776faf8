//! Command-line definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pulse_core::{Dimension, Metric};
use pulse_query::Reducer;

#[derive(Debug, Parser)]
#[command(name = "pulse")]
#[command(version)]
#[command(about = "Filter and summarize clinic performance records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON array of records to load
    #[arg(short, long, global = true, env = "PULSE_DATA")]
    pub data: Option<PathBuf>,

    /// Dashboard configuration file (JSON)
    #[arg(short, long, global = true, env = "PULSE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Filter flags. Anything omitted selects everything present in the data.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Location to include (repeatable)
    #[arg(short = 'L', long = "location", global = true)]
    pub locations: Vec<String>,

    /// Department to include (repeatable)
    #[arg(short = 'D', long = "department", global = true)]
    pub departments: Vec<String>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Every dashboard panel (default)
    Report,

    /// KPI scorecards only
    Kpis,

    /// Group by one or two dimensions and reduce a metric
    Aggregate {
        /// Dimension(s) to group by, e.g. `department` or `department,location`
        #[arg(long, value_delimiter = ',', required = true)]
        by: Vec<Dimension>,

        /// Metric to reduce
        #[arg(long)]
        metric: Metric,

        /// Reduction to apply
        #[arg(long, default_value = "mean")]
        reducer: Reducer,

        /// Keep only the N largest groups
        #[arg(long)]
        top: Option<usize>,
    },

    /// The filtered records themselves (`--format csv` for a CSV download)
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    /// Comma-separated values (`kpis`, `aggregate` and `export`)
    Csv,
}
