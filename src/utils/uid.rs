//! Student UID derivation and validation.
//!
//! The UID is a derived, semi-human-readable key, not a surrogate key:
//! `<Year><Branch><AdmYY><RollNN>`, e.g. year 1, branch CSE, admitted 2024,
//! roll 10 -> `1CSE2410`. Every mutation that touches year, branch,
//! admission year or roll number must re-derive it.

use once_cell::sync::Lazy;
use regex::Regex;

/// One digit for year, 2-3 uppercase letters for branch, 2 digits for the
/// admission-year suffix, 2-3 digits for roll number.
static UID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-4][A-Z]{2,3}\d{2}\d{2,3}$").expect("Invalid UID regex"));

/// Derive the UID from its source fields. Pure and infallible for
/// well-typed inputs.
///
/// The admission year contributes only its last two decimal digits, which
/// is lossy: 2024 and 2124 produce the same suffix. Callers must therefore
/// keep the uid uniqueness check separate from the roll-number tuple check.
pub fn generate_uid(year: i32, branch: &str, admission_year: i32, roll_no: i32) -> String {
    format!(
        "{}{}{:02}{:02}",
        year,
        branch,
        admission_year.rem_euclid(100),
        roll_no
    )
}

/// Check a stored or derived UID against the format contract.
pub fn is_valid_uid(uid: &str) -> bool {
    UID_RE.is_match(uid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uid_examples() {
        assert_eq!(generate_uid(1, "CSE", 2024, 10), "1CSE2410");
        assert_eq!(generate_uid(3, "ECE", 2022, 7), "3ECE2207");
    }

    #[test]
    fn test_roll_no_zero_padding() {
        assert_eq!(generate_uid(2, "ME", 2023, 5), "2ME2305");
        // three-digit rolls pass through unpadded
        assert_eq!(generate_uid(2, "ME", 2023, 123), "2ME23123");
    }

    #[test]
    fn test_admission_year_truncation_collides() {
        // the two-digit suffix is lossy across centuries
        assert_eq!(
            generate_uid(1, "CSE", 2024, 10),
            generate_uid(1, "CSE", 2124, 10)
        );
    }

    #[test]
    fn test_generated_uids_match_format() {
        for branch in ["CSE", "ECE", "ME", "CE", "IT", "EEE", "AI", "DS"] {
            for year in 1..=4 {
                for roll in [1, 42, 99, 100, 999] {
                    let uid = generate_uid(year, branch, 2024, roll);
                    assert!(is_valid_uid(&uid), "generated UID {uid} failed validation");
                }
            }
        }
    }

    #[test]
    fn test_invalid_uids() {
        assert!(!is_valid_uid(""));
        assert!(!is_valid_uid("5CSE2410")); // year out of range
        assert!(!is_valid_uid("1cse2410")); // lowercase branch
        assert!(!is_valid_uid("1C2410")); // branch too short
        assert!(!is_valid_uid("1CSEX2410")); // branch too long
        assert!(!is_valid_uid("1CSE24101234")); // roll too long
        assert!(!is_valid_uid("1CSE241")); // roll too short
    }
}
