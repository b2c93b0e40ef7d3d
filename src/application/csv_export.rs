use chrono::{DateTime, Utc};

use crate::domain::entities::waitlist_entry::WaitlistEntry;

const CSV_HEADER: [&str; 4] = ["ID", "Email", "Date", "Source"];
const MISSING_SOURCE: &str = "N/A";

/// Rendered export ready to be served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

/// `the_bridge_waitlist_<YYYY-MM-DD>.csv` for the given export time.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("the_bridge_waitlist_{}.csv", now.format("%Y-%m-%d"))
}

/// en-US `toLocaleString` layout, e.g. `1/15/2026, 3:04:05 PM`.
pub fn locale_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header line plus one fully quoted line per entry, joined by `\n`.
pub fn render_csv(entries: &[WaitlistEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for entry in entries {
        let id = entry.id.to_string();
        let date = locale_date(&entry.created_at);
        let source = entry.source.as_deref().unwrap_or(MISSING_SOURCE);
        let row = [id.as_str(), entry.email.as_str(), date.as_str(), source]
            .map(quote)
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

pub fn build_export(entries: &[WaitlistEntry], now: DateTime<Utc>) -> CsvExport {
    CsvExport {
        filename: export_filename(now),
        body: render_csv(entries),
    }
}
