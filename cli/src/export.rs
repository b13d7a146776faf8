//! CSV output.
//!
//! Record exports use the column headers of the clinic performance CSV, so
//! an exported file reads back through the same field aliases as a loaded
//! one.

use anyhow::Result;
use chrono::NaiveDate;
use csv::Writer;
use pulse_core::Record;
use pulse_query::{AggregateRow, AggregationResult, KpiSummary};
use serde::Serialize;

const RECORD_HEADERS: [&str; 7] = [
    "Date",
    "Location",
    "Department",
    "Avg_Wait_Time_Min",
    "Avg_Treatment_Cost_USD",
    "Patient_Satisfaction_Score",
    "Appointments_Available",
];

#[derive(Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Location")]
    location: &'a str,
    #[serde(rename = "Department")]
    department: &'a str,
    #[serde(rename = "Avg_Wait_Time_Min")]
    wait_time_minutes: f64,
    #[serde(rename = "Avg_Treatment_Cost_USD")]
    treatment_cost_usd: f64,
    #[serde(rename = "Patient_Satisfaction_Score")]
    satisfaction_score: f64,
    #[serde(rename = "Appointments_Available")]
    appointments_available: u32,
}

impl<'a> From<&'a Record> for CsvRecord<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            date: r.date(),
            location: r.location(),
            department: r.department(),
            wait_time_minutes: r.wait_time_minutes(),
            treatment_cost_usd: r.treatment_cost_usd(),
            satisfaction_score: r.satisfaction_score(),
            appointments_available: r.appointments_available(),
        }
    }
}

/// Write records as CSV. The header row is present even with no records.
pub fn records_to_csv(records: &[&Record]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(RECORD_HEADERS)?;
    }
    for record in records {
        writer.serialize(CsvRecord::from(*record))?;
    }
    finish(writer)
}

/// Write the KPI scorecards as a single CSV row; absent values are empty.
pub fn kpis_to_csv(kpis: &KpiSummary) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.serialize(kpis)?;
    finish(writer)
}

/// Write aggregation rows with one column per grouping dimension.
pub fn aggregation_to_csv(result: &AggregationResult, rows: &[AggregateRow]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());

    let mut header: Vec<String> = result
        .group_by()
        .dimensions()
        .iter()
        .map(ToString::to_string)
        .collect();
    header.push(result.metric().to_string());
    header.push("count".to_string());
    writer.write_record(&header)?;

    for row in rows {
        let mut line = vec![row.key.first().to_string()];
        if let Some(second) = row.key.second() {
            line.push(second.to_string());
        }
        line.push(row.value.to_string());
        line.push(row.count.to_string());
        writer.write_record(&line)?;
    }
    finish(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut output = String::from_utf8(bytes)?;
    // The binary prints with a trailing newline of its own.
    if output.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}
