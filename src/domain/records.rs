//! Record schemas for the seven exported collections
//!
//! Each struct declares which fields the report depends on (required) and
//! which may be missing or null in the store (optional). Unknown JSON fields
//! are ignored so schema additions on the store side don't break exports.
//! Status-like columns decode into enums that keep unrecognised values
//! verbatim instead of failing the row.

use super::ids::{BenefitId, MemberId, RecordId, ReferralCode};
use serde::{Deserialize, Deserializer};
use std::fmt;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
        #[serde(from = "String")]
        pub enum $name {
            $($variant,)+
            /// Value not known to this build, kept as stored
            Other(String),
        }

        impl $name {
            /// Returns the stored text of the value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// Lifecycle status of a booking
    BookingStatus {
        Pending => "pending",
        Completed => "completed",
        Cancelled => "cancelled",
        NoShow => "no-show",
    }
);

string_enum!(
    /// Membership status of a member
    MemberStatus {
        Active => "active",
        Expired => "expired",
        Pending => "pending",
    }
);

string_enum!(
    /// How a patient record entered the system
    PatientSource {
        Booking => "booking",
        Membership => "membership",
        Manual => "manual",
    }
);

/// Treats `""` and whitespace-only referral codes as absent
fn referral_code_opt<'de, D>(deserializer: D) -> Result<Option<ReferralCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| ReferralCode::new(value).ok()))
}

/// Treats a null count as zero
fn count_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Consultation booking
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Free-text membership label entered at booking time
    #[serde(default)]
    pub membership: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Booking {
    /// Creates a booking with only the required fields set
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            contact_number: None,
            membership: None,
            preferred_date: None,
            preferred_time: None,
            message: None,
            status: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Clinic member
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Membership tier (Green, Gold, Platinum)
    #[serde(default)]
    pub membership_type: Option<String>,
    #[serde(default)]
    pub status: Option<MemberStatus>,
    #[serde(default)]
    pub membership_start_date: Option<String>,
    #[serde(default)]
    pub membership_expiry_date: Option<String>,
    #[serde(default, deserialize_with = "referral_code_opt")]
    pub referral_code: Option<ReferralCode>,
    /// Referral code of the member who referred this one
    #[serde(default, deserialize_with = "referral_code_opt")]
    pub referred_by: Option<ReferralCode>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub referral_count: i64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub amount_paid: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Member {
    /// Creates a member with only the required fields set
    pub fn new(id: MemberId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            membership_type: None,
            status: None,
            membership_start_date: None,
            membership_expiry_date: None,
            referral_code: None,
            referred_by: None,
            referral_count: 0,
            payment_method: None,
            amount_paid: None,
            created_at: None,
        }
    }

    /// Whether the member's status is `active`
    pub fn is_active(&self) -> bool {
        self.status == Some(MemberStatus::Active)
    }

    /// Whether the member's tier equals `tier`, ignoring case
    pub fn has_tier(&self, tier: &str) -> bool {
        self.membership_type
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == tier.to_lowercase())
    }
}

/// Patient record kept by the clinic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub membership: Option<String>,
    #[serde(default)]
    pub membership_status: Option<String>,
    #[serde(default)]
    pub source: Option<PatientSource>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PatientRecord {
    /// Creates a patient record with only the required fields set
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            contact_number: None,
            date_of_birth: None,
            age: None,
            gender: None,
            emergency_contact: None,
            membership: None,
            membership_status: None,
            source: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Payment transaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    #[serde(default)]
    pub member_id: Option<MemberId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub stripe_payment_intent_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    /// Creates a transaction with only the id set
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            member_id: None,
            description: None,
            amount: None,
            currency: None,
            payment_method: None,
            payment_status: None,
            transaction_type: None,
            stripe_payment_intent_id: None,
            created_at: None,
        }
    }

    /// Whether the payment went through
    pub fn is_completed(&self) -> bool {
        self.payment_status.as_deref() == Some("completed")
    }
}

/// Benefit allotted to every member of a tier
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MembershipBenefit {
    pub id: BenefitId,
    /// Tier the benefit belongs to
    pub membership_type: String,
    pub benefit_name: String,
    pub total_quantity: i64,
}

/// One consumed unit of a benefit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenefitClaim {
    pub id: RecordId,
    pub member_id: MemberId,
    pub benefit_id: BenefitId,
    #[serde(default)]
    pub claimed_at: Option<String>,
}

/// Reward granted through the referral program
///
/// Only counted by the export; no sheet projects its fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferralReward {
    pub id: RecordId,
    #[serde(default)]
    pub referrer_id: Option<MemberId>,
    #[serde(default)]
    pub referred_member_id: Option<MemberId>,
    #[serde(default)]
    pub reward_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
