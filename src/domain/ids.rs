//! Domain identifier types
//!
//! Newtype wrappers for the keys the report joins on. Keeping them distinct
//! stops a member id from being looked up in a benefit index, or a referral
//! code from being compared against a member id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new ", $label, " from a string")]
            ///
            /// Returns `Err` if the value is empty or whitespace.
            pub fn new(id: impl Into<String>) -> Result<Self, String> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(format!("{} cannot be empty", $label));
                }
                Ok(Self(id))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Stable store identifier of a booking, patient record, transaction,
    /// claim or reward row.
    ///
    /// ```
    /// use clinic_export::domain::ids::RecordId;
    /// use std::str::FromStr;
    ///
    /// let id = RecordId::from_str("5b0c7a8e-0d7b-4a43-9d0e-7d1f3d1b2c11").unwrap();
    /// assert_eq!(id.as_str(), "5b0c7a8e-0d7b-4a43-9d0e-7d1f3d1b2c11");
    /// ```
    RecordId,
    "Record ID"
);

define_id!(
    /// Identifier of a member; referenced by transactions and benefit claims.
    MemberId,
    "Member ID"
);

define_id!(
    /// Identifier of a membership benefit; referenced by benefit claims.
    BenefitId,
    "Benefit ID"
);

define_id!(
    /// A member's self-assigned referral token, used by other members as
    /// their `referred_by` value.
    ReferralCode,
    "Referral code"
);
