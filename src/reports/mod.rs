//! Flat report rows for export.
//!
//! Each report turns family records into a sequence of [`Row`]s: ordered
//! label/value pairs with primitive values only. Column labels are
//! human-readable and stable for a given [`Language`], so an export layer can
//! hand the rows straight to a spreadsheet or CSV writer.
//!
//! | Report | Function | One row per |
//! |--------|----------|-------------|
//! | Clothing sheet | [`clothing_rows`] | member (optionally the head too) |
//! | Aid history | [`history_rows`] | disbursement |
//! | Family status | [`family_status_rows`] | family |
//! | Member roster | [`member_roster_rows`] | head, then each member |

mod clothing;
mod history;
mod labels;
mod roster;
mod status;

pub use clothing::{ClothingOptions, clothing_rows};
pub use history::history_rows;
pub use labels::{Column, column_label, kind_label, recurrence_label, role_label, status_label};
pub use roster::{JOB_EDUCATION_SEPARATOR, member_roster_rows};
pub use status::{FamilyStatusRow, family_status, family_status_rows};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Language, Preferences};

/// Inputs every report needs besides the records themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    /// Language of column labels and enumerated values.
    pub language: Language,
    /// Reference date for ages.
    pub today: NaiveDate,
}

impl ReportContext {
    pub fn new(language: Language, today: NaiveDate) -> Self {
        Self { language, today }
    }

    /// Context for the session's language, as of `today`.
    pub fn from_preferences(preferences: &Preferences, today: NaiveDate) -> Self {
        Self::new(preferences.language, today)
    }

    pub fn label(&self, column: Column) -> &'static str {
        column_label(column, self.language)
    }
}

/// The reports the dashboard exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    Clothing,
    AidHistory,
    FamilyStatus,
    Members,
}

impl ReportKind {
    /// Base name of the exported file.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Clothing => "ClothingSheet",
            Self::AidHistory => "AidHistory",
            Self::FamilyStatus => "FamilyStatus",
            Self::Members => "MembersDetails",
        }
    }

    /// Worksheet name inside the exported workbook.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::AidHistory => "History",
            Self::FamilyStatus => "FamilyStatus",
            Self::Members => "Members",
        }
    }
}

/// A primitive cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Amount(Decimal),
    Date(NaiveDate),
    /// Nothing to show (e.g. unknown age). Rendered as a blank cell.
    Empty,
}

impl Cell {
    /// Text cell, or [`Cell::Empty`] when there is no text.
    pub fn text_or_empty(value: Option<&str>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => Self::Text(s.to_string()),
            _ => Self::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Self::Amount(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// One output row: label/value pairs in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<Cell>) {
        self.cells.push((label.into(), value.into()));
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.push(label, value);
        self
    }

    /// Value of the first column with `label`.
    pub fn get(&self, label: &str) -> Option<&Cell> {
        self.cells.iter().find(|(l, _)| l == label).map(|(_, c)| c)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(l, _)| l.as_str())
    }

    pub fn cells(&self) -> &[(String, Cell)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn row_keeps_column_order() {
        let row = Row::new()
            .with("Name", "Omar")
            .with("Amount", dec!(12.5))
            .with("Age", Cell::Integer(9))
            .with("Size", Option::<&str>::None);
        assert_eq!(row.labels().collect::<Vec<_>>(), ["Name", "Amount", "Age", "Size"]);
        assert_eq!(row.get("Amount"), Some(&Cell::Amount(dec!(12.5))));
        assert_eq!(row.get("Size"), Some(&Cell::Empty));
        assert_eq!(row.get("Missing"), None);
    }

    #[test]
    fn blank_text_becomes_empty() {
        assert!(Cell::text_or_empty(Some("  ")).is_empty());
        assert!(Cell::text_or_empty(None).is_empty());
        assert_eq!(Cell::text_or_empty(Some("XL")).as_text(), Some("XL"));
    }

    #[test]
    fn export_names() {
        assert_eq!(ReportKind::Members.file_stem(), "MembersDetails");
        assert_eq!(ReportKind::AidHistory.sheet_name(), "History");
    }
}
