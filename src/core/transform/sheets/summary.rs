//! Summary dashboard sheet
//!
//! Fixed key/value layout of aggregate counts. Section rows are separated by
//! a single empty-string cell.

use crate::core::transform::format::format_currency;
use crate::core::transform::grid::{Cell, Grid};
use crate::domain::{BookingStatus, ExportData, MemberStatus, PatientSource};
use chrono::{DateTime, Utc};

pub const TITLE: &str = "HILOMÈ CLINIC - DATA EXPORT SUMMARY";

/// Tiers reported in the membership breakdown
pub const TIERS: [(&str, &str); 3] = [
    ("green", "Green Members"),
    ("gold", "Gold Members"),
    ("platinum", "Platinum Members"),
];

struct Rows(Vec<Vec<Cell>>);

impl Rows {
    fn section(&mut self, title: &str) {
        self.0.push(vec![Cell::text(format!("=== {title} ==="))]);
    }

    fn count(&mut self, label: &str, n: usize) {
        self.0.push(vec![Cell::text(label), Cell::from(n)]);
    }

    fn value(&mut self, label: &str, value: Cell) {
        self.0.push(vec![Cell::text(label), value]);
    }

    fn blank(&mut self) {
        self.0.push(vec![Cell::text("")]);
    }
}

pub fn build_summary(data: &ExportData, generated_at: DateTime<Utc>) -> Grid {
    let bookings_with = |status: BookingStatus| {
        data.bookings
            .iter()
            .filter(|b| b.status.as_ref() == Some(&status))
            .count()
    };
    let members_with = |status: MemberStatus| {
        data.members
            .iter()
            .filter(|m| m.status.as_ref() == Some(&status))
            .count()
    };
    let records_from = |source: PatientSource| {
        data.patient_records
            .iter()
            .filter(|p| p.source.as_ref() == Some(&source))
            .count()
    };

    let revenue: f64 = data
        .transactions
        .iter()
        .filter(|t| t.is_completed())
        .filter_map(|t| t.amount)
        .sum();
    let referrals_made: i64 = data.members.iter().map(|m| m.referral_count).sum();
    let referring_members = data.members.iter().filter(|m| m.referral_count > 0).count();

    let mut rows = Rows(Vec::new());
    rows.value(
        "Generated Date",
        Cell::Text(generated_at.format("%Y-%m-%d").to_string()),
    );
    rows.blank();

    rows.section("BOOKINGS OVERVIEW");
    rows.count("Total Bookings", data.bookings.len());
    rows.count("Pending Bookings", bookings_with(BookingStatus::Pending));
    rows.count("Completed Bookings", bookings_with(BookingStatus::Completed));
    rows.count("Cancelled Bookings", bookings_with(BookingStatus::Cancelled));
    rows.count("No-Show Bookings", bookings_with(BookingStatus::NoShow));
    rows.blank();

    rows.section("MEMBERS OVERVIEW");
    rows.count("Total Members", data.members.len());
    rows.count("Active Members", members_with(MemberStatus::Active));
    rows.count("Expired Members", members_with(MemberStatus::Expired));
    rows.count("Pending Applications", members_with(MemberStatus::Pending));
    rows.blank();

    rows.section("MEMBERSHIP BY TIER");
    for (tier, label) in TIERS {
        let n = data
            .members
            .iter()
            .filter(|m| m.is_active() && m.has_tier(tier))
            .count();
        rows.count(label, n);
    }
    rows.blank();

    rows.section("FINANCIAL OVERVIEW");
    rows.value("Total Revenue", Cell::Text(format_currency(Some(revenue))));
    rows.count("Total Transactions", data.transactions.len());
    rows.blank();

    rows.section("REFERRAL PROGRAM");
    rows.value("Total Referrals Made", Cell::Int(referrals_made));
    rows.count("Members with Referrals", referring_members);
    rows.blank();

    rows.section("PATIENT RECORDS");
    rows.count("Total Patient Records", data.patient_records.len());
    rows.count("Records from Bookings", records_from(PatientSource::Booking));
    rows.count("Records from Membership", records_from(PatientSource::Membership));
    rows.count("Manual Records", records_from(PatientSource::Manual));

    Grid {
        header: vec![TITLE.to_string()],
        rows: rows.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::format::parse_timestamp;
    use crate::domain::{Booking, Member, MemberId, RecordId, Transaction};

    fn lookup<'a>(grid: &'a Grid, label: &str) -> &'a Cell {
        grid.rows
            .iter()
            .find(|row| row.first() == Some(&Cell::text(label)))
            .and_then(|row| row.get(1))
            .unwrap_or_else(|| panic!("missing row {label}"))
    }

    fn booking(id: &str, status: &str) -> Booking {
        let mut b = Booking::new(RecordId::new(id).unwrap(), id, "x@example.com");
        b.status = Some(BookingStatus::from(status));
        b
    }

    fn member(id: &str, tier: &str, status: MemberStatus, referrals: i64) -> Member {
        let mut m = Member::new(MemberId::new(id).unwrap(), id, "x@example.com");
        m.membership_type = Some(tier.to_string());
        m.status = Some(status);
        m.referral_count = referrals;
        m
    }

    fn txn(id: &str, amount: f64, status: &str) -> Transaction {
        let mut t = Transaction::new(RecordId::new(id).unwrap());
        t.amount = Some(amount);
        t.payment_status = Some(status.to_string());
        t
    }

    #[test]
    fn test_summary_layout() {
        let grid = build_summary(
            &ExportData::default(),
            parse_timestamp("2025-03-04T23:59:00Z").unwrap(),
        );

        assert_eq!(grid.header, vec![TITLE.to_string()]);
        assert_eq!(grid.rows.len(), 33);
        assert_eq!(
            grid.rows[0],
            vec![Cell::text("Generated Date"), Cell::text("2025-03-04")]
        );
        assert_eq!(grid.rows[1], vec![Cell::text("")]);
        assert_eq!(grid.rows[2], vec![Cell::text("=== BOOKINGS OVERVIEW ===")]);
        assert_eq!(
            grid.rows[32],
            vec![Cell::text("Manual Records"), Cell::Int(0)]
        );
        assert_eq!(lookup(&grid, "Total Revenue"), &Cell::text("₱0.00"));
    }

    #[test]
    fn test_booking_status_counts() {
        let data = ExportData {
            bookings: vec![
                booking("b1", "pending"),
                booking("b2", "completed"),
                booking("b3", "cancelled"),
            ],
            ..ExportData::default()
        };

        let grid = build_summary(&data, Utc::now());
        assert_eq!(lookup(&grid, "Total Bookings"), &Cell::Int(3));
        assert_eq!(lookup(&grid, "Pending Bookings"), &Cell::Int(1));
        assert_eq!(lookup(&grid, "Completed Bookings"), &Cell::Int(1));
        assert_eq!(lookup(&grid, "Cancelled Bookings"), &Cell::Int(1));
        assert_eq!(lookup(&grid, "No-Show Bookings"), &Cell::Int(0));
    }

    #[test]
    fn test_tiers_count_active_members_only() {
        let data = ExportData {
            members: vec![
                member("m1", "Gold", MemberStatus::Active, 2),
                member("m2", "gold", MemberStatus::Active, 0),
                member("m3", "Gold", MemberStatus::Expired, 1),
                member("m4", "PLATINUM", MemberStatus::Active, 0),
            ],
            ..ExportData::default()
        };

        let grid = build_summary(&data, Utc::now());
        assert_eq!(lookup(&grid, "Gold Members"), &Cell::Int(2));
        assert_eq!(lookup(&grid, "Platinum Members"), &Cell::Int(1));
        assert_eq!(lookup(&grid, "Green Members"), &Cell::Int(0));
        assert_eq!(lookup(&grid, "Expired Members"), &Cell::Int(1));
        assert_eq!(lookup(&grid, "Total Referrals Made"), &Cell::Int(3));
        assert_eq!(lookup(&grid, "Members with Referrals"), &Cell::Int(2));
    }

    #[test]
    fn test_revenue_counts_completed_only() {
        let data = ExportData {
            transactions: vec![
                txn("t1", 1000.0, "completed"),
                txn("t2", 250.5, "completed"),
                txn("t3", 9999.0, "pending"),
            ],
            ..ExportData::default()
        };

        let grid = build_summary(&data, Utc::now());
        assert_eq!(lookup(&grid, "Total Revenue"), &Cell::text("₱1,250.50"));
        assert_eq!(lookup(&grid, "Total Transactions"), &Cell::Int(3));
    }
}
