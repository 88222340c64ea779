//! Parsing of raw form input at the add/update boundary

use chrono::NaiveDate;
use reminder_types::{Error, Result, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim a required field, rejecting it when empty
pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field).into());
    }
    Ok(trimmed)
}

/// Parse a `YYYY-MM-DD` calendar date. Unpadded or signed forms are rejected.
pub fn parse_service_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    if !is_iso_date_shape(trimmed) {
        return Err(Error::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a non-negative whole-number odometer reading
pub fn parse_odometer(s: &str) -> Result<u64> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| Error::InvalidOdometer(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        let err = require("   ", "Vehicle number").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField("Vehicle number"))
        ));
        assert_eq!(require(" MH01AB1234 ", "Vehicle number").unwrap(), "MH01AB1234");
    }

    #[test]
    fn test_parse_service_date() {
        let date = parse_service_date("2024-11-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
    }

    #[test]
    fn test_parse_service_date_rejects_bad_input() {
        for bad in ["2024-02-30", "2023-02-29", "01/11/2024", "2024-13-01", "yesterday", ""] {
            assert!(
                matches!(parse_service_date(bad), Err(Error::InvalidDate(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_service_date_requires_padded_form() {
        for bad in ["2024-1-5", "2024-01-5", "2024-1-05", "+2024-01-05", "20240105", "2024/01/05"] {
            assert!(
                matches!(parse_service_date(bad), Err(Error::InvalidDate(_))),
                "accepted {bad:?}"
            );
        }
        assert_eq!(
            parse_service_date(" 2024-01-05 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_odometer() {
        assert_eq!(parse_odometer("12000").unwrap(), 12000);
        assert_eq!(parse_odometer("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_odometer_rejects_negative_and_fractional() {
        for bad in ["-5", "12.5", "12k", ""] {
            assert!(
                matches!(parse_odometer(bad), Err(Error::InvalidOdometer(_))),
                "accepted {bad:?}"
            );
        }
    }
}
