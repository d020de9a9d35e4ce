//! Point-in-time snapshot of every exported collection

use super::records::{
    BenefitClaim, Booking, Member, MembershipBenefit, PatientRecord, ReferralReward, Transaction,
};

/// Everything one export run reads from the store
///
/// Collections keep the order the store returned them in, which is the
/// order rows appear in the sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportData {
    pub bookings: Vec<Booking>,
    pub members: Vec<Member>,
    pub patient_records: Vec<PatientRecord>,
    pub transactions: Vec<Transaction>,
    pub benefits: Vec<MembershipBenefit>,
    pub benefit_claims: Vec<BenefitClaim>,
    pub referral_rewards: Vec<ReferralReward>,
}

impl ExportData {
    /// Total number of records across all collections
    pub fn total_records(&self) -> usize {
        self.bookings.len()
            + self.members.len()
            + self.patient_records.len()
            + self.transactions.len()
            + self.benefits.len()
            + self.benefit_claims.len()
            + self.referral_rewards.len()
    }
}
