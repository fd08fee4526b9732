//! CSV rendering of report rows.
//!
//! The header line is taken from the first row's labels. Text is always
//! quoted with internal double quotes doubled; amounts are written with two
//! decimals and a period; dates as `YYYY-MM-DD`; empty cells stay blank.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reports::{Cell, ReportKind, Row};

/// Output options for [`to_csv`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field separator.
    pub separator: char,
    /// Record terminator.
    pub line_ending: String,
    /// Write the label line before the data.
    pub include_header: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            line_ending: "\r\n".into(),
            include_header: true,
        }
    }
}

/// Render rows as CSV text. No rows yields an empty string.
pub fn to_csv(rows: &[Row], config: &CsvConfig) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut out = String::new();
    if config.include_header {
        for (i, label) in first.labels().enumerate() {
            if i > 0 {
                out.push(config.separator);
            }
            csv_field_str(&mut out, label);
        }
        out.push_str(&config.line_ending);
    }

    for row in rows {
        for (i, (_, cell)) in row.cells().iter().enumerate() {
            if i > 0 {
                out.push(config.separator);
            }
            csv_field(&mut out, cell);
        }
        out.push_str(&config.line_ending);
    }

    tracing::debug!(rows = rows.len(), bytes = out.len(), "rendered CSV");
    out
}

/// File name for an exported report, e.g. `AidHistory.csv`.
pub fn report_file_name(kind: ReportKind) -> String {
    format!("{}.csv", kind.file_stem())
}

fn csv_field(out: &mut String, cell: &Cell) {
    match cell {
        Cell::Text(s) => csv_field_str(out, s),
        Cell::Integer(n) => out.push_str(&n.to_string()),
        Cell::Amount(d) => csv_field_decimal(out, *d),
        Cell::Date(d) => out.push_str(&d.format("%Y-%m-%d").to_string()),
        Cell::Empty => {}
    }
}

/// Always quoted; a literal `"` is written twice.
fn csv_field_str(out: &mut String, value: &str) {
    out.push('"');
    out.push_str(&value.replace('"', "\"\""));
    out.push('"');
}

/// Cents precision, period separator.
fn csv_field_decimal(out: &mut String, amount: Decimal) {
    out.push_str(&format!("{:.2}", amount.round_dp(2)));
}
