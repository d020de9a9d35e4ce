//! Patient records sheet

use super::{bookings::NON_MEMBER, date_cell, present, text_or_blank};
use crate::core::transform::grid::{display_id, Cell, Grid};
use crate::domain::PatientRecord;

pub const HEADER: [&str; 14] = [
    "Patient ID",
    "Name",
    "Email",
    "Phone",
    "Date of Birth",
    "Age",
    "Gender",
    "Emergency Contact",
    "Membership Tier",
    "Membership Status",
    "Source",
    "Notes (Summary)",
    "Created Date",
    "Last Updated",
];

/// Notes are cut to this many characters
pub const NOTES_SUMMARY_CHARS: usize = 200;

pub fn build_patient_records(records: &[PatientRecord]) -> Grid {
    let mut grid = Grid::new(&HEADER);

    for (i, record) in records.iter().enumerate() {
        grid.push(vec![
            Cell::Text(display_id("PT", i)),
            Cell::text(&record.name),
            Cell::text(&record.email),
            text_or_blank(&record.contact_number),
            date_cell(&record.date_of_birth),
            Cell::opt_int(record.age),
            text_or_blank(&record.gender),
            text_or_blank(&record.emergency_contact),
            Cell::text(present(&record.membership).unwrap_or(NON_MEMBER)),
            text_or_blank(&record.membership_status),
            Cell::opt_text(record.source.as_ref().map(|s| s.as_str())),
            Cell::opt_text(present(&record.notes).map(summarize_notes).as_deref()),
            date_cell(&record.created_at),
            date_cell(&record.updated_at),
        ]);
    }

    grid
}

fn summarize_notes(notes: &str) -> String {
    notes.chars().take(NOTES_SUMMARY_CHARS).collect()
}
