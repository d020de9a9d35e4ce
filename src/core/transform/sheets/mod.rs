//! Sheet builders
//!
//! One pure function per worksheet. Builders read typed records (and the
//! run's generation instant where time matters) and return a [`Grid`]; rows
//! follow the order of the primary collection.

pub mod benefits;
pub mod bookings;
pub mod members;
pub mod patients;
pub mod referrals;
pub mod summary;
pub mod transactions;

pub use benefits::build_benefits_usage;
pub use bookings::build_bookings;
pub use members::build_members;
pub use patients::build_patient_records;
pub use referrals::build_referrals;
pub use summary::build_summary;
pub use transactions::build_transactions;

use super::format::{format_currency, format_date};
use super::grid::{Cell, Grid, SheetName};
use crate::domain::ExportData;
use chrono::{DateTime, Utc};

/// A built worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: SheetName,
    pub grid: Grid,
}

/// Build every worksheet, in workbook order
pub fn build_all(data: &ExportData, generated_at: DateTime<Utc>) -> Vec<Sheet> {
    SheetName::ALL
        .iter()
        .map(|&name| {
            let grid = match name {
                SheetName::SummaryDashboard => build_summary(data, generated_at),
                SheetName::Bookings => build_bookings(&data.bookings),
                SheetName::Members => build_members(&data.members, generated_at),
                SheetName::PatientRecords => build_patient_records(&data.patient_records),
                SheetName::Transactions => build_transactions(&data.transactions, &data.members),
                SheetName::Referrals => build_referrals(&data.members),
                SheetName::BenefitsUsage => {
                    build_benefits_usage(&data.members, &data.benefits, &data.benefit_claims)
                }
            };
            tracing::debug!(sheet = %name, rows = grid.row_count(), "Built sheet");
            Sheet { name, grid }
        })
        .collect()
}

/// Optional text treating `""` as absent
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub(crate) fn text_or_blank(value: &Option<String>) -> Cell {
    Cell::opt_text(present(value))
}

pub(crate) fn date_cell(value: &Option<String>) -> Cell {
    blank_if_empty(format_date(value.as_deref()))
}

pub(crate) fn currency_cell(amount: Option<f64>) -> Cell {
    blank_if_empty(format_currency(amount))
}

fn blank_if_empty(text: String) -> Cell {
    if text.is_empty() {
        Cell::Blank
    } else {
        Cell::Text(text)
    }
}
