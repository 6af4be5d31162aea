//! # Temporal Policy
//!
//! Century inference for two-digit birth years, and the single point where
//! the current date is sampled.
//!
//! ## Design Decision
//!
//! Every time-dependent operation in this crate takes the reference date
//! as an explicit `NaiveDate` parameter; only the `now`-sampling wrappers
//! ([`validate`][crate::validate]) call [`current_date`], exactly once per
//! call. Tests pin the reference date and stay deterministic.
//!
//! The century boundary is relative to the reference date, not fixed: a
//! two-digit year strictly below the current year's last two digits is
//! read as 20xx, anything else as 19xx. The policy is therefore
//! time-dependent — the same input can infer a different century across a
//! year boundary, and a two-digit year equal to the current one lands in
//! the 1900s.

use chrono::{Datelike, NaiveDate, Utc};

/// The current UTC date. The one `now` read in the crate.
#[must_use]
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}

/// Infer the full birth year for a two-digit year, relative to `today`.
///
/// With `L` the last two digits of `today`'s year: values in `[0, L)` map
/// to `2000 + yy`, values in `[L, 99]` map to `1900 + yy`. At a year-00
/// boundary (e.g. 2100) the 2000s window is empty and every two-digit
/// year maps to the 1900s.
#[must_use]
pub fn birth_year(two_digit_year: u32, today: NaiveDate) -> i32 {
    let current = today.year().rem_euclid(100) as u32;
    if two_digit_year < current {
        2000 + two_digit_year as i32
    } else {
        1900 + two_digit_year as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn below_current_two_digit_year_is_2000s() {
        assert_eq!(birth_year(0, date(2024, 6, 15)), 2000);
        assert_eq!(birth_year(23, date(2024, 6, 15)), 2023);
    }

    #[test]
    fn equal_to_current_two_digit_year_is_1900s() {
        // The window is exclusive at the top: 24 in 2024 reads as 1924.
        assert_eq!(birth_year(24, date(2024, 6, 15)), 1924);
    }

    #[test]
    fn above_current_two_digit_year_is_1900s() {
        assert_eq!(birth_year(86, date(2024, 6, 15)), 1986);
        assert_eq!(birth_year(99, date(2024, 6, 15)), 1999);
    }

    #[test]
    fn year_00_boundary_maps_everything_to_1900s() {
        assert_eq!(birth_year(0, date(2000, 1, 1)), 1900);
        assert_eq!(birth_year(50, date(2000, 1, 1)), 1950);
    }

    #[test]
    fn inference_shifts_across_year_boundary() {
        // The same two-digit year changes century as the clock advances.
        assert_eq!(birth_year(24, date(2024, 12, 31)), 1924);
        assert_eq!(birth_year(24, date(2025, 1, 1)), 2024);
    }
}
