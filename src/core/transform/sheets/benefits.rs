//! Benefits usage sheet

use crate::core::transform::grid::{Cell, Grid};
use crate::core::transform::lookup::ClaimCounts;
use crate::domain::{BenefitClaim, Member, MembershipBenefit};

pub const HEADER: [&str; 6] = [
    "Member Name",
    "Membership Tier",
    "Benefit Name",
    "Used",
    "Total Available",
    "Usage Status",
];

/// One row per (active member, benefit of the member's tier)
///
/// Tiers are compared case-insensitively. Members whose tier has no
/// benefits contribute no rows.
pub fn build_benefits_usage(
    members: &[Member],
    benefits: &[MembershipBenefit],
    claims: &[BenefitClaim],
) -> Grid {
    let counts = ClaimCounts::new(claims);
    let mut grid = Grid::new(&HEADER);

    for member in members.iter().filter(|m| m.is_active()) {
        for benefit in benefits.iter().filter(|b| member.has_tier(&b.membership_type)) {
            let used = counts.used(&member.id, &benefit.id);
            let status = if used >= benefit.total_quantity {
                "Fully Used"
            } else {
                "Available"
            };

            grid.push(vec![
                Cell::text(&member.name),
                Cell::opt_text(member.membership_type.as_deref()),
                Cell::text(&benefit.benefit_name),
                Cell::Int(used),
                Cell::Int(benefit.total_quantity),
                Cell::text(status),
            ]);
        }
    }

    grid
}
