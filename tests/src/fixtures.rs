//! Hand-written datasets.

use chrono::NaiveDate;
use pulse_core::Record;

/// Build a calendar date, panicking on an invalid one.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| panic!("invalid date {}-{}-{}", y, m, d))
}

/// Build a record from positional values.
#[allow(clippy::too_many_arguments)]
pub fn record(
    on: NaiveDate,
    location: &str,
    department: &str,
    wait: f64,
    cost: f64,
    satisfaction: f64,
    appointments: u32,
) -> Record {
    Record::builder()
        .date(on)
        .location(location)
        .department(department)
        .wait_time_minutes(wait)
        .treatment_cost_usd(cost)
        .satisfaction_score(satisfaction)
        .appointments_available(appointments)
        .build()
        .unwrap_or_else(|e| panic!("fixture record is invalid: {}", e))
}

/// The two-record scenario: one ER visit in A and one in B on
/// consecutive days.
pub fn two_clinics() -> Vec<Record> {
    vec![
        record(date(2024, 1, 1), "A", "ER", 10.0, 100.0, 4.0, 5),
        record(date(2024, 1, 2), "B", "ER", 20.0, 200.0, 3.0, 3),
    ]
}

/// A week of data across three campuses and four departments, with
/// some location/department combinations never occurring.
pub fn campus_week() -> Vec<Record> {
    vec![
        record(date(2024, 3, 4), "Rochester", "Cardiology", 18.0, 1250.0, 4.4, 12),
        record(date(2024, 3, 4), "Rochester", "Emergency", 42.0, 980.0, 3.1, 4),
        record(date(2024, 3, 4), "Phoenix", "Oncology", 25.0, 3100.0, 4.6, 6),
        record(date(2024, 3, 5), "Jacksonville", "Emergency", 55.0, 870.0, 2.8, 2),
        record(date(2024, 3, 5), "Phoenix", "Cardiology", 16.0, 1400.0, 4.2, 10),
        record(date(2024, 3, 6), "Rochester", "Neurology", 30.0, 2200.0, 4.0, 7),
        record(date(2024, 3, 7), "Jacksonville", "Cardiology", 22.0, 1180.0, 3.9, 9),
        record(date(2024, 3, 8), "Rochester", "Cardiology", 20.0, 1300.0, 4.5, 11),
        record(date(2024, 3, 9), "Phoenix", "Emergency", 48.0, 1020.0, 3.0, 3),
        record(date(2024, 3, 10), "Rochester", "Oncology", 27.0, 2950.0, 4.7, 5),
    ]
}
