//! # The Validation Result Record
//!
//! [`IdentityProfile`] packages the outcome of validating an identity
//! number together with the demographic facts derived from its digits.
//! The record is asymmetric by contract: derived fields are populated
//! only when `is_valid` is true, and are all absent otherwise. Callers
//! must check `is_valid` before reading them — there is no such thing as
//! a partial profile.
//!
//! [`validate_at`] is the full pipeline: normalize, gate, checksum,
//! derive, assemble. It never fails and never panics; every malformed
//! input — empty, non-numeric, wrong length, overflow-inducing length,
//! checksum mismatch, impossible embedded date — collapses to
//! [`IdentityProfile::empty`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::IdentityNumber;
use crate::temporal;

/// The outcome of validating a South African identity number.
///
/// Optional fields serialize only when present, so the empty profile
/// serializes as `{"is_valid":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProfile {
    /// Whether the input was a valid identity number.
    pub is_valid: bool,

    /// Date of birth decoded from the `YYMMDD` block. Present iff valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    /// Age in whole calendar years. Present iff valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    /// Whether the holder is a South African citizen. Present iff valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_citizen: Option<bool>,

    /// Whether the holder is classified female. Present iff valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_female: Option<bool>,
}

impl IdentityProfile {
    /// The canonical invalid result: `is_valid` false, every derived
    /// field absent.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            is_valid: false,
            date_of_birth: None,
            age: None,
            is_citizen: None,
            is_female: None,
        }
    }
}

/// Validate an identity number and derive its demographic profile,
/// using `today` as the reference date for century inference and age.
///
/// This function never fails: any rejection — structural, checksum, or an
/// embedded date that is not a calendar date — yields the empty profile.
#[must_use]
pub fn validate_at(raw: &str, today: NaiveDate) -> IdentityProfile {
    match IdentityNumber::new(raw) {
        Ok(id) => id.profile(today),
        Err(_) => IdentityProfile::empty(),
    }
}

/// Validate an identity number against the current UTC date.
///
/// Samples the date once and delegates to [`validate_at`]. Century
/// inference makes the outcome time-dependent; tests should prefer
/// [`validate_at`] with a pinned date.
#[must_use]
pub fn validate(raw: &str) -> IdentityProfile {
    validate_at(raw, temporal::current_date())
}
