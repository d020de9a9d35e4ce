//! Join indexes
//!
//! Key-to-record lookups built once per sheet build. A miss resolves to
//! [`UNKNOWN`] at the call site rather than an error; dangling references in
//! the store are expected.

use crate::domain::{BenefitClaim, BenefitId, Member, MemberId, ReferralCode};
use std::collections::HashMap;

/// Display value for a reference that doesn't resolve
pub const UNKNOWN: &str = "Unknown";

/// Member lookups by id and by referral code
#[derive(Debug, Default)]
pub struct MemberIndex<'a> {
    by_id: HashMap<&'a MemberId, &'a Member>,
    by_code: HashMap<&'a ReferralCode, &'a Member>,
}

impl<'a> MemberIndex<'a> {
    /// Index `members`; on duplicate keys the last record wins
    pub fn new(members: &'a [Member]) -> Self {
        let mut index = Self::default();
        for member in members {
            index.by_id.insert(&member.id, member);
            if let Some(code) = &member.referral_code {
                index.by_code.insert(code, member);
            }
        }
        index
    }

    pub fn by_id(&self, id: &MemberId) -> Option<&'a Member> {
        self.by_id.get(id).copied()
    }

    pub fn by_referral_code(&self, code: &ReferralCode) -> Option<&'a Member> {
        self.by_code.get(code).copied()
    }

    /// Member name for `id`, or [`UNKNOWN`]
    pub fn name_or_unknown(&self, id: Option<&MemberId>) -> &'a str {
        id.and_then(|id| self.by_id(id))
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN)
    }
}

/// Claim counts keyed by (member, benefit)
#[derive(Debug, Default)]
pub struct ClaimCounts<'a> {
    counts: HashMap<(&'a MemberId, &'a BenefitId), i64>,
}

impl<'a> ClaimCounts<'a> {
    pub fn new(claims: &'a [BenefitClaim]) -> Self {
        let mut counts = HashMap::new();
        for claim in claims {
            *counts.entry((&claim.member_id, &claim.benefit_id)).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of claims `member` made against `benefit`
    pub fn used(&self, member: &MemberId, benefit: &BenefitId) -> i64 {
        self.counts.get(&(member, benefit)).copied().unwrap_or(0)
    }
}
