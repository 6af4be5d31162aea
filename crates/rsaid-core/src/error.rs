//! # Error Hierarchy
//!
//! Structured error types for identity number validation, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the offending input so that callers can diagnose
//! a rejection without re-running the validation themselves. The full
//! validation pipeline ([`validate_at`][crate::validate_at]) never surfaces
//! these errors — every rejection collapses to the empty profile. The
//! helper surface ([`IdentityNumber::new`][crate::IdentityNumber::new] and
//! the [`demographics`][crate::demographics] functions) exposes them
//! directly.

use thiserror::Error;

/// Validation errors for South African identity numbers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty, or whitespace-only after trimming.
    #[error("identity number is empty")]
    Empty,

    /// The input contains characters other than ASCII decimal digits.
    #[error("identity number contains non-digit characters: \"{0}\"")]
    NotNumeric(String),

    /// The control digit does not match the computed checksum.
    #[error("identity number failed checksum validation: \"{0}\"")]
    ChecksumMismatch(String),

    /// The digit string passed the checksum but is not 13 digits long.
    /// Without this guard, position-based derivation would index past the
    /// end of the string for such inputs.
    #[error("identity number \"{input}\" is {length} digits, expected 13")]
    WrongLength {
        /// The digit string that was rejected.
        input: String,
        /// Its actual length.
        length: usize,
    },

    /// A derivation consulted a digit position the input does not have.
    #[error("identity number \"{input}\" has no digit at position {position}")]
    MissingDigit {
        /// The input that was too short.
        input: String,
        /// The zero-indexed position that was consulted.
        position: usize,
    },

    /// The leading `YYMMDD` block does not encode a calendar date.
    #[error("invalid birth date in \"{value}\": {reason}")]
    InvalidBirthDate {
        /// The input whose date block was rejected.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
