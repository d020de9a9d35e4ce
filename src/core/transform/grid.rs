//! Sheet grids
//!
//! A [`Grid`] is the in-memory form of one worksheet: a header row plus data
//! rows of typed cells. Builders produce grids; the workbook assembler and the
//! fingerprinting step consume them.

use serde::Serialize;
use std::fmt;

/// One worksheet cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Text(String),
    Int(i64),
    Blank,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Text cell, or blank when the value is absent
    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(Cell::text).unwrap_or(Cell::Blank)
    }

    /// Integer cell, or blank when the value is absent
    pub fn opt_int(value: Option<i64>) -> Self {
        value.map(Cell::Int).unwrap_or(Cell::Blank)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::text(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Header row plus data rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, header included
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}

/// Worksheets of the export, in workbook order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SheetName {
    SummaryDashboard,
    Bookings,
    Members,
    PatientRecords,
    Transactions,
    Referrals,
    BenefitsUsage,
}

impl SheetName {
    /// All sheets in workbook order
    pub const ALL: [SheetName; 7] = [
        SheetName::SummaryDashboard,
        SheetName::Bookings,
        SheetName::Members,
        SheetName::PatientRecords,
        SheetName::Transactions,
        SheetName::Referrals,
        SheetName::BenefitsUsage,
    ];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            SheetName::SummaryDashboard => "Summary Dashboard",
            SheetName::Bookings => "Bookings",
            SheetName::Members => "Members",
            SheetName::PatientRecords => "Patient Records",
            SheetName::Transactions => "Transactions",
            SheetName::Referrals => "Referrals",
            SheetName::BenefitsUsage => "Benefits Usage",
        }
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Sequential display id: `prefix-0001` for the first row
pub fn display_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{:04}", index + 1)
}
