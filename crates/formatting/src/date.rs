//! Date formatting (`DD Mon YYYY`).

use chrono::Datelike;

/// Short month names as written in British English.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Render a date as `05 Mar 2025`.
///
/// Works for any chrono date or datetime; only the calendar day is used.
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}
