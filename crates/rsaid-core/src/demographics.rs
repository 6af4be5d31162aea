//! # Demographic Derivation
//!
//! Position-based derivation of demographic facts from the digits of an
//! identity number: date of birth, age, gender category, and citizenship.
//!
//! These functions operate on raw digit strings so they can be called
//! outside the full validation pipeline, including on partial input (a
//! twelve-digit string is enough for [`date_of_birth`]). They replicate
//! the exact digit-position semantics the validated
//! [`IdentityNumber`][crate::IdentityNumber] methods use; the difference
//! is that here a missing or non-digit position is an explicit
//! [`ValidationError`] instead of being ruled out by construction.
//!
//! ## Gender Classification
//!
//! Only the single digit at zero-indexed position 6 — the first digit of
//! the four-digit sequence block — is consulted: `0..=4` is female,
//! `5..=9` is male. The block as a whole is often described as the gender
//! range ("below 5000 is female"), but classification has always keyed on
//! that one digit alone, and that behavior is what downstream systems
//! expect. Kept as-is.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;
use crate::temporal;

/// Zero-indexed position of the gender classification digit.
pub const GENDER_DIGIT_POSITION: usize = 6;

/// Zero-indexed position of the citizenship digit.
pub const CITIZENSHIP_DIGIT_POSITION: usize = 10;

/// Highest gender digit classified as female.
const FEMALE_MAX_DIGIT: u32 = 4;

/// The digit at a zero-indexed position, as a number.
fn digit_at(id: &str, position: usize) -> Result<u32, ValidationError> {
    match id.chars().nth(position) {
        Some(ch) => ch
            .to_digit(10)
            .ok_or_else(|| ValidationError::NotNumeric(id.to_string())),
        None => Err(ValidationError::MissingDigit {
            input: id.to_string(),
            position,
        }),
    }
}

/// Derive the date of birth from the leading `YYMMDD` digits.
///
/// Returns `Ok(None)` for empty input. The century of the two-digit year
/// is inferred relative to `today` — see [`temporal::birth_year`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBirthDate`] when the input is shorter
/// than six characters, the leading block contains a non-digit, or the
/// digits do not encode a calendar date (month 13, February 30, and so
/// on). Calendar errors deliberately surface here rather than being
/// clamped; the full validation pipeline absorbs them into the empty
/// profile.
pub fn date_of_birth(
    id: &str,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, ValidationError> {
    if id.is_empty() {
        return Ok(None);
    }

    let block: Vec<char> = id.chars().take(6).collect();
    if block.len() != 6 {
        return Err(ValidationError::InvalidBirthDate {
            value: id.to_string(),
            reason: "expected six leading digits (YYMMDD)".to_string(),
        });
    }
    let digits: Option<Vec<u32>> = block.iter().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return Err(ValidationError::InvalidBirthDate {
            value: id.to_string(),
            reason: "non-digit in the YYMMDD block".to_string(),
        });
    };

    let two_digit_year = digits[0] * 10 + digits[1];
    let month = digits[2] * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];
    let year = temporal::birth_year(two_digit_year, today);

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidBirthDate {
            value: id.to_string(),
            reason: format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
        })
}

/// Age in whole calendar years: the current year minus the birth year.
///
/// `None` for an absent date of birth. This is a simple year subtraction,
/// deliberately not adjusted for whether the birthday has passed in the
/// current year.
#[must_use]
pub fn age(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> Option<i32> {
    date_of_birth.map(|dob| today.year() - dob.year())
}

/// Classify gender from the digit at position 6: `0..=4` is female.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDigit`] when the input has no digit
/// at position 6, or [`ValidationError::NotNumeric`] when the character
/// there is not a digit.
pub fn is_female(id: &str) -> Result<bool, ValidationError> {
    Ok(digit_at(id, GENDER_DIGIT_POSITION)? <= FEMALE_MAX_DIGIT)
}

/// Classify citizenship from the digit at position 10: `0` is a citizen,
/// any other digit is not.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDigit`] when the input has no digit
/// at position 10, or [`ValidationError::NotNumeric`] when the character
/// there is not a digit.
pub fn is_citizen(id: &str) -> Result<bool, ValidationError> {
    Ok(digit_at(id, CITIZENSHIP_DIGIT_POSITION)? == 0)
}
