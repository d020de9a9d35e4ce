//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`MemberId`], [`BenefitId`], [`ReferralCode`], [`RecordId`])
//! - **Record schemas** for the seven exported collections ([`Booking`], [`Member`], ...)
//! - **Snapshot** of one export run's input ([`ExportData`])
//! - **Error types** ([`ClinicError`], [`StoreError`], [`NotifierError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Join keys are newtypes, so a member id can't be used where a benefit id is expected:
//!
//! ```rust
//! use clinic_export::domain::{BenefitId, MemberId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let member_id = MemberId::new("m-123")?;
//! let benefit_id = BenefitId::new("b-456")?;
//!
//! // This won't compile
//! // let wrong: MemberId = benefit_id;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod records;
pub mod result;
pub mod snapshot;

pub use errors::{ClinicError, NotifierError, StoreError};
pub use ids::{BenefitId, MemberId, RecordId, ReferralCode};
pub use records::{
    BenefitClaim, Booking, BookingStatus, Member, MemberStatus, MembershipBenefit,
    PatientRecord, PatientSource, ReferralReward, Transaction,
};
pub use result::Result;
pub use snapshot::ExportData;
