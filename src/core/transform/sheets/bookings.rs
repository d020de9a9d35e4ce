//! Bookings sheet

use super::{date_cell, present, text_or_blank};
use crate::core::transform::grid::{display_id, Cell, Grid};
use crate::domain::Booking;

pub const HEADER: [&str; 11] = [
    "Booking Number",
    "Name",
    "Email",
    "Phone",
    "Membership Status",
    "Appointment Date",
    "Appointment Time",
    "Service/Message",
    "Status",
    "Created Date",
    "Last Updated",
];

/// Label used when a booking has no membership
pub const NON_MEMBER: &str = "Non-member";

pub fn build_bookings(bookings: &[Booking]) -> Grid {
    let mut grid = Grid::new(&HEADER);

    for (i, booking) in bookings.iter().enumerate() {
        grid.push(vec![
            Cell::Text(display_id("BK", i)),
            Cell::text(&booking.name),
            Cell::text(&booking.email),
            text_or_blank(&booking.contact_number),
            Cell::text(present(&booking.membership).unwrap_or(NON_MEMBER)),
            date_cell(&booking.preferred_date),
            text_or_blank(&booking.preferred_time),
            text_or_blank(&booking.message),
            Cell::opt_text(booking.status.as_ref().map(|s| s.as_str())),
            date_cell(&booking.created_at),
            date_cell(&booking.updated_at),
        ]);
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingStatus, RecordId};

    #[test]
    fn test_booking_row() {
        let mut booking = Booking::new(RecordId::new("b-1").unwrap(), "Ana Cruz", "ana@example.com");
        booking.preferred_date = Some("2025-03-01".to_string());
        booking.preferred_time = Some("10:00 AM".to_string());
        booking.status = Some(BookingStatus::from("no-show"));
        booking.created_at = Some("2025-02-20T08:15:00+00:00".to_string());

        let grid = build_bookings(&[booking]);
        let row = &grid.rows[0];

        assert_eq!(grid.header.len(), 11);
        assert_eq!(row[0], Cell::text("BK-0001"));
        assert_eq!(row[3], Cell::Blank);
        assert_eq!(row[4], Cell::text("Non-member"));
        assert_eq!(row[5], Cell::text("2025-03-01"));
        assert_eq!(row[8], Cell::text("no-show"));
        assert_eq!(row[9], Cell::text("2025-02-20"));
        assert_eq!(row[10], Cell::Blank);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let bookings: Vec<_> = ["first", "second", "third"]
            .iter()
            .map(|n| Booking::new(RecordId::new(*n).unwrap(), *n, "x@example.com"))
            .collect();

        let grid = build_bookings(&bookings);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.rows[2][0], Cell::text("BK-0003"));
        assert_eq!(grid.rows[2][1], Cell::text("third"));
    }

    #[test]
    fn test_unknown_status_kept_verbatim() {
        let mut booking = Booking::new(RecordId::new("b").unwrap(), "A", "a@example.com");
        booking.status = Some(BookingStatus::from("rescheduled"));
        let grid = build_bookings(&[booking]);
        assert_eq!(grid.rows[0][8], Cell::text("rescheduled"));
    }
}
