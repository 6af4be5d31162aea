//! # The Identity Number Newtype
//!
//! [`IdentityNumber`] is a validated South African identity number.
//! Construction is the only validation path: once a value exists, it is
//! exactly 13 ASCII digits with a matching control digit, and every
//! derivation method on it is total.
//!
//! ## Digit Layout
//!
//! ```text
//! 8 6 0 8 0 6   5 1 0 6   0   8   2
//! \___________/ \_______/  |   |   |
//!   YYMMDD       sequence  |   |   control digit
//!   birth date             |   historically unused
//!                          citizenship (0 = citizen)
//! ```
//!
//! ## Validation
//!
//! - Leading/trailing whitespace is trimmed; nothing else is normalized.
//! - The trimmed string must be non-empty and all ASCII digits.
//! - The control digit must match the checksum ([`checksum::verify`]).
//! - The length must be exactly 13. The checksum arithmetic alone does
//!   not pin the length, and position-based derivation would read past
//!   the end of a shorter string that happened to satisfy it, so the
//!   length is bound-checked here rather than left to indexing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::demographics;
use crate::error::ValidationError;
use crate::profile::IdentityProfile;

/// Number of digits in a South African identity number.
pub const ID_LENGTH: usize = 13;

/// A validated South African identity number.
///
/// Stores the trimmed 13-digit canonical form. Serializes as the bare
/// digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Create an identity number from a string, validating format and
    /// checksum.
    ///
    /// Leading and trailing whitespace is trimmed before validation;
    /// interior whitespace is not, and fails the digit gate.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Empty`] for empty or whitespace-only input.
    /// - [`ValidationError::NotNumeric`] when any non-digit remains after
    ///   trimming.
    /// - [`ValidationError::ChecksumMismatch`] when the control digit does
    ///   not match the computed checksum (wrong-length digit strings
    ///   normally land here — the checksum rejects them arithmetically).
    /// - [`ValidationError::WrongLength`] for the rare digit string that
    ///   satisfies the checksum at a length other than 13.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric(trimmed.to_string()));
        }
        if !checksum::verify(trimmed) {
            return Err(ValidationError::ChecksumMismatch(trimmed.to_string()));
        }
        if trimmed.len() != ID_LENGTH {
            return Err(ValidationError::WrongLength {
                input: trimmed.to_string(),
                length: trimmed.len(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Access the canonical 13-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the identity number grouped by field: `YYMMDD SSSS CAZ`.
    pub fn formatted(&self) -> String {
        format!("{} {} {}", &self.0[..6], &self.0[6..10], &self.0[10..])
    }

    /// The `YYMMDD` birth date block.
    pub fn birth_digits(&self) -> &str {
        &self.0[..6]
    }

    /// The four-digit gender/sequence block.
    pub fn sequence_digits(&self) -> &str {
        &self.0[6..10]
    }

    /// The citizenship digit (position 10).
    pub fn citizenship_digit(&self) -> u32 {
        self.digit(demographics::CITIZENSHIP_DIGIT_POSITION)
    }

    /// The control digit (position 12).
    pub fn control_digit(&self) -> u32 {
        self.digit(ID_LENGTH - 1)
    }

    fn digit(&self, position: usize) -> u32 {
        u32::from(self.0.as_bytes()[position] - b'0')
    }

    /// Derive the date of birth, inferring the century relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBirthDate`] when the embedded
    /// `YYMMDD` block is not a calendar date. A checksum-valid identity
    /// number does not guarantee a valid date — the checksum ranges over
    /// all digits equally.
    pub fn date_of_birth(&self, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
        match demographics::date_of_birth(&self.0, today)? {
            Some(date) => Ok(date),
            // Unreachable: the inner string is never empty.
            None => Err(ValidationError::InvalidBirthDate {
                value: self.0.clone(),
                reason: "empty input".to_string(),
            }),
        }
    }

    /// Age in whole calendar years at `today` (simple year subtraction).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBirthDate`] when the embedded
    /// date block is not a calendar date.
    pub fn age(&self, today: NaiveDate) -> Result<i32, ValidationError> {
        Ok(today.year() - self.date_of_birth(today)?.year())
    }

    /// Whether the gender digit classifies as female (`0..=4`).
    pub fn is_female(&self) -> bool {
        self.digit(demographics::GENDER_DIGIT_POSITION) <= 4
    }

    /// Whether the citizenship digit marks a South African citizen (`0`).
    pub fn is_citizen(&self) -> bool {
        self.citizenship_digit() == 0
    }

    /// Assemble the full demographic profile.
    ///
    /// Returns the populated profile when the embedded birth date is a
    /// calendar date, and the empty profile otherwise — a result is either
    /// fully populated or fully absent, never partial.
    pub fn profile(&self, today: NaiveDate) -> IdentityProfile {
        let Ok(date_of_birth) = self.date_of_birth(today) else {
            return IdentityProfile::empty();
        };
        IdentityProfile {
            is_valid: true,
            date_of_birth: Some(date_of_birth),
            age: demographics::age(Some(date_of_birth), today),
            is_citizen: Some(self.is_citizen()),
            is_female: Some(self.is_female()),
        }
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
