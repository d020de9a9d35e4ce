//! Members sheet

use super::{currency_cell, date_cell, text_or_blank};
use crate::core::transform::format::days_remaining;
use crate::core::transform::grid::{display_id, Cell, Grid};
use crate::domain::Member;
use chrono::{DateTime, Utc};

pub const HEADER: [&str; 14] = [
    "Member ID",
    "Name",
    "Email",
    "Phone",
    "Membership Tier",
    "Status",
    "Join Date",
    "Expiration Date",
    "Days Remaining",
    "Referral Code",
    "Referred By",
    "Referral Count",
    "Payment Method",
    "Amount Paid",
];

/// Build the members sheet
///
/// Days Remaining is measured from `now`, the run's generation instant, so
/// every row in one export uses the same reference point.
pub fn build_members(members: &[Member], now: DateTime<Utc>) -> Grid {
    let mut grid = Grid::new(&HEADER);

    for (i, member) in members.iter().enumerate() {
        grid.push(vec![
            Cell::Text(display_id("MEM", i)),
            Cell::text(&member.name),
            Cell::text(&member.email),
            text_or_blank(&member.phone),
            text_or_blank(&member.membership_type),
            Cell::opt_text(member.status.as_ref().map(|s| s.as_str())),
            date_cell(&member.membership_start_date),
            date_cell(&member.membership_expiry_date),
            Cell::opt_int(days_remaining(
                member.membership_expiry_date.as_deref(),
                now,
            )),
            Cell::opt_text(member.referral_code.as_ref().map(|c| c.as_str())),
            Cell::opt_text(member.referred_by.as_ref().map(|c| c.as_str())),
            Cell::Int(member.referral_count),
            text_or_blank(&member.payment_method),
            currency_cell(member.amount_paid),
        ]);
    }

    grid
}
