use chrono::{Local, NaiveDate};
use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.trim().chars().count() < min {
            Err(format!("Must have at least {} characters", min))
        } else {
            Ok(())
        }
    })
}

/// Passes iff the input holds exactly 11 digits once every non-digit
/// character (dots, dashes, spaces) is stripped.
pub fn national_id() -> Validator {
    Box::new(|value: &str| {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        if digits.len() == 11 {
            Ok(())
        } else {
            Err("National ID must contain 11 digits".to_string())
        }
    })
}

pub fn positive_number() -> Validator {
    Box::new(|value: &str| match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
        _ => Err("Must be a positive number".to_string()),
    })
}

/// `YYYY-MM-DD`, not later than the current date.
pub fn past_date() -> Validator {
    Box::new(move |value: &str| check_past_date(value, Local::now().date_naive()))
}

/// Same rule with an injected "today", for deterministic tests.
pub fn past_date_as_of(today: NaiveDate) -> Validator {
    Box::new(move |value: &str| check_past_date(value, today))
}

fn check_past_date(value: &str, today: NaiveDate) -> Result<(), String> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| "Must be a valid date".to_string())?;
    if date > today {
        Err("Date cannot be in the future".to_string())
    } else {
        Ok(())
    }
}

pub fn email() -> Validator {
    let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid");
    Box::new(move |value: &str| {
        if re.is_match(value.trim()) {
            Ok(())
        } else {
            Err("Must be a valid email address".to_string())
        }
    })
}

/// Rejects the placeholder entry of a select input.
pub fn selection(placeholder: impl Into<String>) -> Validator {
    let placeholder = placeholder.into();
    Box::new(move |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == placeholder {
            Err("Please select an option".to_string())
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        let v = required();
        assert!(v("").is_err());
        assert!(v("   ").is_err());
        assert!(v("x").is_ok());
    }

    #[test]
    fn min_length_counts_trimmed_characters() {
        let v = min_length(3);
        assert!(v("ab").is_err());
        assert!(v("  ab  ").is_err());
        assert!(v("abc").is_ok());
    }

    #[test]
    fn name_rules_match_reference_cases() {
        let validators = [required(), min_length(3)];
        let run = |value: &str| validators.iter().try_for_each(|v| v(value));
        assert!(run("").is_err());
        assert!(run("ab").is_err());
        assert!(run("abc").is_ok());
    }

    #[test]
    fn national_id_requires_exactly_eleven_digits() {
        let v = national_id();
        assert!(v("123.456.789-01").is_ok());
        assert!(v("12345678901").is_ok());
        assert!(v("123").is_err());
        assert!(v("123456789012").is_err());
        assert!(v("").is_err());
    }

    #[test]
    fn positive_number_rejects_zero_negative_and_junk() {
        let v = positive_number();
        assert!(v("1500").is_ok());
        assert!(v("0.5").is_ok());
        assert!(v("0").is_err());
        assert!(v("-10").is_err());
        assert!(v("abc").is_err());
        assert!(v("inf").is_err());
        assert!(v("").is_err());
    }

    #[test]
    fn past_date_rejects_future_and_garbage() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let v = past_date_as_of(today);
        assert!(v("2000-06-15").is_ok());
        assert!(v("2024-06-14").is_ok());
        assert!(v("2024-06-15").is_err());
        assert!(v("not-a-date").is_err());
        assert!(v("").is_err());
    }

    #[test]
    fn email_matches_local_at_domain_tld() {
        let v = email();
        assert!(v("ana@example.com").is_ok());
        assert!(v("a.b+c@mail.example.org").is_ok());
        assert!(v("ana@example").is_err());
        assert!(v("example.com").is_err());
        assert!(v("").is_err());
    }

    #[test]
    fn selection_rejects_placeholder() {
        let v = selection("Select");
        assert!(v("Select").is_err());
        assert!(v("").is_err());
        assert!(v("Female").is_ok());
    }
}
