//! Referrals sheet

use super::date_cell;
use crate::core::transform::grid::{Cell, Grid};
use crate::core::transform::lookup::{MemberIndex, UNKNOWN};
use crate::domain::Member;

pub const HEADER: [&str; 7] = [
    "Referrer Name",
    "Referrer Code",
    "Referred Member Name",
    "Referred Member Email",
    "Referral Date",
    "Referral Status",
    "Referrer's Total Referrals",
];

/// One row per member who was referred by someone
///
/// The referrer is found by referral code. A referral counts as `Converted`
/// once the referred member is active.
pub fn build_referrals(members: &[Member]) -> Grid {
    let index = MemberIndex::new(members);
    let mut grid = Grid::new(&HEADER);

    for member in members {
        let Some(code) = &member.referred_by else {
            continue;
        };
        let referrer = index.by_referral_code(code);

        grid.push(vec![
            Cell::text(referrer.map(|r| r.name.as_str()).unwrap_or(UNKNOWN)),
            Cell::text(code.as_str()),
            Cell::text(&member.name),
            Cell::text(&member.email),
            date_cell(&member.created_at),
            Cell::text(if member.is_active() { "Converted" } else { "Pending" }),
            Cell::Int(referrer.map(|r| r.referral_count).unwrap_or(0)),
        ]);
    }

    grid
}
