#![deny(missing_docs)]

//! # rsaid-core — South African Identity Number Validation
//!
//! This crate validates South African national identity numbers (13
//! decimal digits, `YYMMDD SSSS C A Z`) and derives demographic facts —
//! date of birth, age, gender category, citizenship — from their digits.
//! It is a pure, stateless computation: no I/O, no shared mutable state,
//! no caching. External dependencies are only `serde`, `thiserror`, and
//! `chrono`.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrapper for the domain primitive.** [`IdentityNumber`]
//!    validates at construction; once a value exists, every derivation on
//!    it is total.
//!
//! 2. **One never-failing entry point.** [`validate_at`] collapses every
//!    malformed input — empty, non-numeric, wrong length, checksum
//!    mismatch, impossible embedded date — to the empty
//!    [`IdentityProfile`]. No panics, no partial results.
//!
//! 3. **The current date is a parameter.** Century inference and age are
//!    relative to a reference date that callers pass in; the wall clock
//!    is sampled only in the [`validate`] wrapper, once per call.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with
//!    `thiserror` on the helper surface — no `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rsaid_core::validate_at;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! let profile = validate_at("8608065106082", today);
//! assert!(profile.is_valid);
//! assert_eq!(profile.age, Some(38));
//!
//! let rejected = validate_at("8608065173083", today);
//! assert!(!rejected.is_valid);
//! assert_eq!(rejected.age, None);
//! ```

pub mod checksum;
pub mod demographics;
pub mod error;
pub mod identity;
pub mod profile;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identity::{IdentityNumber, ID_LENGTH};
pub use profile::{validate, validate_at, IdentityProfile};
