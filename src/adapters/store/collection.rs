//! The seven collections an export reads, and the order each is read in
//!
//! Row order in every 1:1 sheet follows the store's sort, so the sort key is
//! part of each collection's definition rather than a detail of the query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction of a collection query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// PostgREST spelling of the direction
    pub fn as_postgrest(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Single sort key of a collection query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.column, self.direction.as_postgrest())
    }
}

/// Collections fetched for an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Bookings,
    Members,
    PatientRecords,
    Transactions,
    MembershipBenefits,
    BenefitClaims,
    ReferralRewards,
}

impl Collection {
    /// Every collection, in fetch-declaration order
    pub const ALL: [Collection; 7] = [
        Collection::Bookings,
        Collection::Members,
        Collection::PatientRecords,
        Collection::Transactions,
        Collection::MembershipBenefits,
        Collection::BenefitClaims,
        Collection::ReferralRewards,
    ];

    /// Store table name
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Bookings => "bookings",
            Collection::Members => "members",
            Collection::PatientRecords => "patient_records",
            Collection::Transactions => "transactions",
            Collection::MembershipBenefits => "membership_benefits",
            Collection::BenefitClaims => "member_benefit_claims",
            Collection::ReferralRewards => "referral_rewards",
        }
    }

    /// Sort applied when reading the collection
    ///
    /// Activity logs come newest first; the benefit catalogue is a reference
    /// table and comes in tier order.
    pub fn sort_key(&self) -> SortKey {
        match self {
            Collection::MembershipBenefits => SortKey {
                column: "membership_type",
                direction: SortDirection::Ascending,
            },
            Collection::BenefitClaims => SortKey {
                column: "claimed_at",
                direction: SortDirection::Descending,
            },
            Collection::Bookings
            | Collection::Members
            | Collection::PatientRecords
            | Collection::Transactions
            | Collection::ReferralRewards => SortKey {
                column: "created_at",
                direction: SortDirection::Descending,
            },
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
