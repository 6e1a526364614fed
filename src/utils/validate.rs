use once_cell::sync::Lazy;
use regex::Regex;

// 10-digit local numbers, first digit 6-9
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("Invalid phone regex"));

pub fn validate_student_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.chars().count() < 2 || trimmed.chars().count() > 50 {
        return Err("Student name must be between 2 and 50 characters");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Please enter a valid 10-digit phone number");
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), &'static str> {
    if !(1..=4).contains(&year) {
        return Err("Year must be 1, 2, 3, or 4");
    }
    Ok(())
}

pub fn validate_roll_no(roll_no: i32) -> Result<(), &'static str> {
    if roll_no < 1 {
        return Err("Roll number must be a positive integer");
    }
    Ok(())
}

/// The upper bound is injected so the check stays deterministic under test.
pub fn validate_admission_year(admission_year: i32, current_year: i32) -> Result<(), &'static str> {
    if admission_year < 2020 || admission_year > current_year {
        return Err("Admission year must be between 2020 and the current year");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_name_bounds() {
        assert!(validate_student_name("Al").is_ok());
        assert!(validate_student_name("A").is_err());
        assert!(validate_student_name("  A  ").is_err());
        assert!(validate_student_name(&"x".repeat(50)).is_ok());
        assert!(validate_student_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_phone_prefix_rule() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("6000000000").is_ok());
        assert!(validate_phone("5876543210").is_err()); // first digit below 6
        assert!(validate_phone("987654321").is_err()); // too short
        assert!(validate_phone("98765432100").is_err()); // too long
        assert!(validate_phone("987654321a").is_err());
    }

    #[test]
    fn test_year_set() {
        for y in 1..=4 {
            assert!(validate_year(y).is_ok());
        }
        assert!(validate_year(0).is_err());
        assert!(validate_year(5).is_err());
    }

    #[test]
    fn test_roll_no_positive() {
        assert!(validate_roll_no(1).is_ok());
        assert!(validate_roll_no(0).is_err());
        assert!(validate_roll_no(-3).is_err());
    }

    #[test]
    fn test_admission_year_window() {
        assert!(validate_admission_year(2020, 2026).is_ok());
        assert!(validate_admission_year(2026, 2026).is_ok());
        assert!(validate_admission_year(2019, 2026).is_err());
        assert!(validate_admission_year(2027, 2026).is_err());
    }
}
