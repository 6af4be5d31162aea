//! # Checksum Validation
//!
//! The South African variant of the Luhn check. The final digit of an
//! identity number is the **control digit**; the twelve digits before it
//! are the working string. Validation combines two sums over the working
//! string (positions are 1-indexed for parity):
//!
//! 1. **Odd-position sum** — the digits at odd positions, summed as-is.
//! 2. **Even-block digit sum** — the digits at even positions concatenated
//!    into a single number, doubled, then the decimal digits of the
//!    product summed (the digit sum, not the product).
//!
//! The checksum is the last decimal digit of the combined total, and the
//! number is valid iff `10 - checksum` equals the control digit.
//!
//! ## Preserved Asymmetry
//!
//! When the checksum digit is 0, `10 - checksum` is 10, which can never
//! equal a single-digit control value — a total ending in 0 always fails,
//! for every possible control digit. A modulo-10 comparison would accept
//! control digit 0 in that case. Downstream systems depend on the exact
//! rejection behavior, so the non-modular comparison is kept as-is; see
//! `checksum_zero_never_validates` below.
//!
//! ## Overflow Fallback
//!
//! The even-position block is parsed as a `u32` before doubling. For
//! abnormally long inputs the parse overflows; the failed parse collapses
//! to a sentinel sum of 0, and a sum of 0 — whether from the sentinel or
//! from genuinely all-zero digits — fails validation immediately. The
//! fallback is explicit fallible parsing, never a panic, so callers can
//! feed arbitrarily long digit strings through [`verify`].

/// Sum of the digits at 1-indexed odd positions of the working string.
///
/// Collapses to the sentinel 0 on any non-digit character or on
/// accumulator overflow; a 0 sum always fails validation in [`verify`].
fn odd_position_sum(digits: &str) -> u32 {
    let mut sum: u32 = 0;
    for ch in digits.chars().step_by(2) {
        let Some(d) = ch.to_digit(10) else {
            return 0;
        };
        let Some(next) = sum.checked_add(d) else {
            return 0;
        };
        sum = next;
    }
    sum
}

/// Digit sum of twice the number formed by the 1-indexed even-position
/// digits of the working string.
///
/// Collapses to the sentinel 0 when the block is empty or does not fit a
/// `u32`; a 0 sum always fails validation in [`verify`].
fn even_block_digit_sum(digits: &str) -> u32 {
    let block: String = digits.chars().skip(1).step_by(2).collect();
    let Ok(value) = block.parse::<u32>() else {
        return 0;
    };

    let mut rest = u64::from(value) * 2;
    let mut sum: u32 = 0;
    while rest > 0 {
        sum += (rest % 10) as u32;
        rest /= 10;
    }
    sum
}

/// Verify the control digit of an identity number.
///
/// Accepts any string: non-digit content, the empty string, and strings of
/// any length are all rejected with `false` rather than a panic. Length is
/// bound-checked before any indexing. Note that this predicate alone does
/// not pin the length to 13 digits — a digit string of another length can
/// occasionally satisfy the arithmetic.
/// [`IdentityNumber::new`](crate::IdentityNumber::new) layers the length
/// requirement on top.
#[must_use]
pub fn verify(id: &str) -> bool {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // All-ASCII guaranteed by the digit check, so byte indexing is safe.
    let split = id.len() - 1;
    let control = u32::from(id.as_bytes()[split] - b'0');
    let working = &id[..split];

    let odd = odd_position_sum(working);
    let even = even_block_digit_sum(working);
    if odd == 0 || even == 0 {
        return false;
    }

    let Some(total) = odd.checked_add(even) else {
        return false;
    };
    let checksum = total % 10;
    10 - checksum == control
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- verify --

    #[test]
    fn verify_accepts_known_valid() {
        assert!(verify("8608065106082"));
        assert!(verify("8608064106083"));
    }

    #[test]
    fn verify_rejects_control_mismatch() {
        assert!(!verify("8608065173083"));
        assert!(!verify("8608065106083"));
    }

    #[test]
    fn verify_rejects_empty_and_single_digit() {
        // A single digit leaves an empty working string: odd sum 0.
        assert!(!verify(""));
        assert!(!verify("8"));
    }

    #[test]
    fn verify_rejects_non_digits() {
        assert!(!verify("86080651060g2"));
        assert!(!verify("8608--=106082"));
        assert!(!verify(" 8608065106082"));
    }

    #[test]
    fn verify_rejects_overflowing_length_without_panic() {
        // 26 digits: the even block is 12 digits, past u32 range, so the
        // parse collapses to the sentinel 0 and validation fails.
        assert!(!verify("86080651060828608065106082"));
    }

    #[test]
    fn verify_rejects_zero_sums() {
        // Working string "000000000000" gives odd sum 0 and even block 0.
        assert!(!verify("0000000000000"));
    }

    #[test]
    fn checksum_zero_never_validates() {
        // "080651068": odd sum 5, even block 8616 -> doubled 17232 ->
        // digit sum 15, total 20, checksum 0. 10 - 0 = 10 matches no
        // control digit, so every control digit fails.
        for control in 0..10 {
            let id = format!("08065106{control}");
            assert!(!verify(&id), "checksum 0 accepted control {control}");
        }
    }

    // -- sums --

    #[test]
    fn odd_sum_of_known_working_string() {
        assert_eq!(odd_position_sum("860806510608"), 13);
    }

    #[test]
    fn even_block_digit_sum_of_known_working_string() {
        // Even block "686168" -> doubled 1372336 -> 1+3+7+2+3+3+6 = 25.
        assert_eq!(even_block_digit_sum("860806510608"), 25);
    }

    #[test]
    fn even_block_overflow_collapses_to_zero() {
        // 20 even-position nines cannot fit a u32.
        let wide = "09".repeat(20);
        assert_eq!(even_block_digit_sum(&wide), 0);
    }

    #[test]
    fn sums_collapse_to_zero_on_non_digits() {
        assert_eq!(odd_position_sum("86x806510608"), 0);
        assert_eq!(even_block_digit_sum("8x0806510608"), 0);
    }

    // -- properties --

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn at_most_one_control_digit_validates(working in "[0-9]{12}") {
                let accepted = (0..10)
                    .filter(|c| verify(&format!("{working}{c}")))
                    .count();
                prop_assert!(accepted <= 1);
            }

            #[test]
            fn zero_checksum_totals_accept_no_control_digit(
                working in "[0-9]{12}"
            ) {
                let odd = odd_position_sum(&working);
                let even = even_block_digit_sum(&working);
                if odd != 0 && even != 0 && (odd + even) % 10 == 0 {
                    for control in 0..10 {
                        let candidate = format!("{}{}", working, control);
                        prop_assert!(!verify(&candidate));
                    }
                }
            }
        }
    }
}
