//! Workbook assembler
//!
//! Lays the built sheets out as an XLSX workbook: fixed sheet order, one
//! column width, bold frozen header row.

use crate::core::transform::{Cell, Sheet};
use crate::domain::{ClinicError, Result};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Width applied to every styled column
pub const COLUMN_WIDTH: f64 = 22.0;

/// Columns styled on every sheet, even narrow ones
pub const MIN_STYLED_COLUMNS: usize = 15;

/// Longest text an XLSX cell can hold, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

const FILENAME_PREFIX: &str = "hilome-data-export";

/// Serialized workbook ready for delivery
#[derive(Debug, Clone)]
pub struct AssembledWorkbook {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `hilome-data-export-YYYY-MM-DD.xlsx` for the run's generation date
pub fn export_filename(generated_at: DateTime<Utc>) -> String {
    format!(
        "{FILENAME_PREFIX}-{}.xlsx",
        generated_at.format("%Y-%m-%d")
    )
}

/// Serialize `sheets`, in the order given, into an XLSX buffer
///
/// # Errors
///
/// Returns [`ClinicError::Workbook`] if a sheet can't be written or the
/// workbook can't be serialized.
pub fn assemble_workbook(sheets: &[Sheet], generated_at: DateTime<Utc>) -> Result<AssembledWorkbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name.title())?;
        write_grid(worksheet, sheet, &header_format)?;
    }

    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| ClinicError::Workbook(format!("Failed to create workbook: {e}")))?;

    Ok(AssembledWorkbook {
        filename: export_filename(generated_at),
        bytes,
    })
}

fn write_grid(worksheet: &mut Worksheet, sheet: &Sheet, header_format: &Format) -> Result<()> {
    let grid = &sheet.grid;
    for (col, title) in grid.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, title.as_str(), header_format)?;
    }

    for (i, row) in grid.rows.iter().enumerate() {
        let row_num = u32::try_from(i + 1)
            .map_err(|_| ClinicError::Workbook(format!("Too many rows: {}", i + 1)))?;

        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    let value = match clamp_to_cell(text) {
                        Some(clamped) => {
                            tracing::warn!(
                                sheet = %sheet.name,
                                row = row_num,
                                column = grid.header.get(col).map(String::as_str).unwrap_or_default(),
                                chars = text.chars().count(),
                                "Cell text truncated to the XLSX limit"
                            );
                            clamped
                        }
                        None => text.as_str(),
                    };
                    worksheet.write_string(row_num, col_num(col)?, value)?;
                }
                Cell::Int(n) => {
                    worksheet.write_number(row_num, col_num(col)?, *n as f64)?;
                }
                Cell::Blank => {}
            }
        }
    }

    for col in 0..grid.width().max(MIN_STYLED_COLUMNS) {
        worksheet.set_column_width(col_num(col)?, COLUMN_WIDTH)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    Ok(())
}

/// First [`MAX_CELL_CHARS`] characters of `text`, or `None` if it already fits
fn clamp_to_cell(text: &str) -> Option<&str> {
    text.char_indices()
        .nth(MAX_CELL_CHARS)
        .map(|(end, _)| &text[..end])
}

fn col_num(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| ClinicError::Workbook(format!("Too many columns: {col}")))
}
