//! Output formatting utilities.
//!
//! Empty selections render as "no data"; a missing value is never shown as
//! zero.

use pulse_core::Record;
use pulse_query::{AggregateRow, AggregationResult, Dashboard, KpiSummary, PivotTable};

const NO_DATA: &str = "no data";

/// Format an optional number with `decimals` places and thousands
/// separators.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        None => NO_DATA.to_string(),
        Some(v) => group_thousands(&format!("{:.*}", decimals, v)),
    }
}

/// Insert `,` between thousands in the integer part of a formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

/// Format the four KPI scorecards.
pub fn format_kpis(kpis: &KpiSummary) -> String {
    let cost = match kpis.avg_treatment_cost {
        Some(_) => format!("${}", format_number(kpis.avg_treatment_cost, 2)),
        None => NO_DATA.to_string(),
    };
    let satisfaction = match kpis.avg_satisfaction {
        Some(_) => format!("{} / 5", format_number(kpis.avg_satisfaction, 2)),
        None => NO_DATA.to_string(),
    };
    let appointments = format_number(kpis.total_appointments_available.map(|n| n as f64), 0);

    let mut output = String::new();
    output.push_str(&format!(
        "Avg Wait Time (min):    {}\n",
        format_number(kpis.avg_wait_time, 1)
    ));
    output.push_str(&format!("Avg Treatment Cost ($): {}\n", cost));
    output.push_str(&format!("Patient Satisfaction:   {}\n", satisfaction));
    output.push_str(&format!("Appointments Available: {}\n", appointments));
    output.push_str(&format!("({})", counted(kpis.record_count, "record")));
    output
}

/// `n` followed by `noun`, pluralized when `n != 1`.
fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Format a grouped aggregation as a table.
pub fn format_aggregation(result: &AggregationResult) -> String {
    format_rows(&aggregation_header(result), result.rows())
}

/// Format the `n` largest groups of an aggregation, largest first.
pub fn format_top(result: &AggregationResult, n: usize) -> String {
    format_rows(&aggregation_header(result), &result.top_n(n))
}

fn aggregation_header(result: &AggregationResult) -> String {
    format!(
        "{} | {} ({})",
        result.group_by(),
        result.metric().label(),
        result.reducer()
    )
}

fn format_rows(header: &str, rows: &[AggregateRow]) -> String {
    if rows.is_empty() {
        return format!("({})", NO_DATA);
    }

    let mut output = String::new();
    output.push_str(header);
    output.push_str(" | records\n");
    output.push_str(&"-".repeat(header.len() + 10));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{} | {} | {}\n",
            row.key,
            format_number(Some(row.value), 2),
            row.count
        ));
    }

    output.push_str(&format!("\n({})", counted(rows.len(), "group")));
    output
}

/// Format a pivot table as a grid; missing cells render as `-`.
pub fn format_pivot(pivot: &PivotTable) -> String {
    if pivot.is_empty() {
        return format!("({})", NO_DATA);
    }

    let mut table: Vec<Vec<String>> = Vec::with_capacity(pivot.rows.len() + 1);
    let mut header = vec![format!("{} \\ {}", pivot.row_dimension, pivot.column_dimension)];
    header.extend(pivot.columns.iter().map(ToString::to_string));
    table.push(header);

    for (label, cells) in pivot.rows.iter().zip(&pivot.cells) {
        let mut line = vec![label.to_string()];
        line.extend(cells.iter().map(|cell| match cell {
            Some(v) => format_number(Some(*v), 1),
            None => "-".to_string(),
        }));
        table.push(line);
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|c| table.iter().map(|line| line[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut output = String::new();
    for line in &table {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        output.push_str(padded.join(" | ").trim_end());
        output.push('\n');
    }
    output.pop();
    output
}

/// Format records as a preview table.
pub fn format_records(records: &[&Record]) -> String {
    if records.is_empty() {
        return "(no results)".to_string();
    }

    let mut output = String::new();
    output.push_str("date | location | department | wait_min | cost_usd | satisfaction | appointments\n");
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for r in records {
        output.push_str(&format!(
            "{} | {} | {} | {:.1} | {:.2} | {:.2} | {}\n",
            r.date(),
            r.location(),
            r.department(),
            r.wait_time_minutes(),
            r.treatment_cost_usd(),
            r.satisfaction_score(),
            r.appointments_available()
        ));
    }

    output.push_str(&format!("\n({})", counted(records.len(), "row")));
    output
}

/// Format every dashboard panel.
pub fn format_dashboard(board: &Dashboard<'_>) -> String {
    let sections: Vec<(&str, String)> = vec![
        ("KPIs", format_kpis(&board.kpis)),
        ("Average Wait Time Over Time", format_aggregation(&board.wait_time_trend)),
        ("Avg Treatment Cost by Department", format_aggregation(&board.cost_by_department)),
        ("Appointments Distribution by Location", format_shares(board)),
        ("Patient Satisfaction Over Time", format_aggregation(&board.satisfaction_trend)),
        (
            "Patient Satisfaction by Department",
            format_aggregation(&board.satisfaction_by_department),
        ),
        (
            "Top Departments by Appointment Availability",
            format_rows("department | Appointments Available (sum)", &board.top_departments),
        ),
        ("Appointments by Department & Location", format_pivot(&board.appointments_heatmap)),
        ("Avg Wait Time by Department & Location", format_pivot(&board.wait_time_heatmap)),
    ];

    sections
        .into_iter()
        .map(|(title, body)| format!("== {} ==\n{}", title, body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_shares(board: &Dashboard<'_>) -> String {
    if board.appointments_by_location.is_empty() {
        return format!("({})", NO_DATA);
    }

    let mut output = String::from("location | appointments | share\n");
    output.push_str(&"-".repeat(32));
    output.push('\n');
    for row in &board.appointments_by_location {
        let share = match row.share {
            Some(s) => format!("{:.1}%", s * 100.0),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{} | {} | {}\n",
            row.key,
            format_number(Some(row.value), 0),
            share
        ));
    }
    output.pop();
    output
}
