//! Next-due derivation and due-status classification
//!
//! Everything here is pure: the reference date is always passed in.

use chrono::{Days, NaiveDate};
use reminder_types::{Error, Result, VehicleRecord};

use super::input::{parse_odometer, parse_service_date};
use crate::model::DueStatus;

/// Calendar days between services
pub const SERVICE_INTERVAL_DAYS: u64 = 365;
/// Kilometres between services
pub const SERVICE_INTERVAL_KM: u64 = 10_000;
/// A service within this many days counts as due soon
pub const DUE_SOON_DAYS: i64 = 7;
/// A service within this many km counts as due soon
pub const DUE_SOON_KM: i64 = 500;

/// Date and odometer at which the next service falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextDue {
    pub date: NaiveDate,
    pub odometer: u64,
}

pub fn compute_next_due(last_service_date: NaiveDate, last_service_odometer: u64) -> Result<NextDue> {
    let date = last_service_date
        .checked_add_days(Days::new(SERVICE_INTERVAL_DAYS))
        .ok_or_else(|| Error::InvalidDate(last_service_date.to_string()))?;
    let odometer = last_service_odometer
        .checked_add(SERVICE_INTERVAL_KM)
        .ok_or_else(|| Error::InvalidOdometer(last_service_odometer.to_string()))?;
    Ok(NextDue { date, odometer })
}

/// [`compute_next_due`] over raw `YYYY-MM-DD` / integer strings
pub fn compute_next_due_from_input(last_service_date: &str, last_service_odometer: &str) -> Result<NextDue> {
    let date = parse_service_date(last_service_date)?;
    let odometer = parse_odometer(last_service_odometer)?;
    compute_next_due(date, odometer)
}

/// Build a full record, deriving the next-due fields from the last service
pub fn derive_record(
    last_service_date: NaiveDate,
    last_service_odometer: u64,
    current_odometer: u64,
) -> Result<VehicleRecord> {
    let next = compute_next_due(last_service_date, last_service_odometer)?;
    Ok(VehicleRecord {
        last_service_date,
        last_service_odometer,
        current_odometer,
        next_service_date: next.date,
        next_service_odometer: next.odometer,
    })
}

/// Signed day count from `reference_date` to `target_date`
pub fn days_remaining(target_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    target_date.signed_duration_since(reference_date).num_days()
}

pub fn classify_status(
    next_service_date: NaiveDate,
    next_service_odometer: u64,
    current_odometer: u64,
    reference_date: NaiveDate,
) -> DueStatus {
    let days_left = days_remaining(next_service_date, reference_date);
    let km_left = signed_km_diff(next_service_odometer, current_odometer);
    classify_remaining(days_left, km_left)
}

/// Tier order matters: overdue, then due today, then due soon.
pub(crate) fn classify_remaining(days_left: i64, km_left: i64) -> DueStatus {
    if days_left < 0 || km_left < 0 {
        DueStatus::Overdue
    } else if days_left == 0 || km_left == 0 {
        DueStatus::DueToday
    } else if days_left <= DUE_SOON_DAYS || km_left <= DUE_SOON_KM {
        DueStatus::DueSoon { days_left, km_left }
    } else {
        DueStatus::Ok { days_left, km_left }
    }
}

fn signed_km_diff(target: u64, current: u64) -> i64 {
    let diff = i128::from(target) - i128::from(current);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_due_one_year_later() {
        let next = compute_next_due(date(2024, 11, 1), 12000).unwrap();
        assert_eq!(next.date, date(2025, 11, 1));
        assert_eq!(next.odometer, 22000);
    }

    #[test]
    fn test_next_due_from_leap_day() {
        let next = compute_next_due(date(2024, 2, 29), 0).unwrap();
        assert_eq!(next.date, date(2025, 2, 28));
        assert_eq!(next.odometer, 10000);
    }

    #[test]
    fn test_next_due_crossing_leap_day() {
        // 2024 has 366 days, so 365 days after 2023-03-01 lands a day early.
        let next = compute_next_due(date(2023, 3, 1), 5).unwrap();
        assert_eq!(next.date, date(2024, 2, 29));
    }

    #[test]
    fn test_next_due_is_always_365_days_out() {
        let mut d = date(2023, 1, 1);
        while d < date(2025, 1, 1) {
            let next = compute_next_due(d, 0).unwrap();
            assert_eq!(days_remaining(next.date, d), 365);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_next_due_overflow() {
        assert!(matches!(
            compute_next_due(NaiveDate::MAX, 0),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            compute_next_due(date(2024, 1, 1), u64::MAX),
            Err(Error::InvalidOdometer(_))
        ));
    }

    #[test]
    fn test_next_due_from_input() {
        let next = compute_next_due_from_input("2024-06-15", "45000").unwrap();
        assert_eq!(next.date, date(2025, 6, 15));
        assert_eq!(next.odometer, 55000);

        assert!(matches!(
            compute_next_due_from_input("15/06/2024", "45000"),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            compute_next_due_from_input("2024-06-15", "-1"),
            Err(Error::InvalidOdometer(_))
        ));
    }

    #[test]
    fn test_derive_record() {
        let record = derive_record(date(2024, 11, 1), 12000, 21000).unwrap();
        assert_eq!(record.current_odometer, 21000);
        assert_eq!(record.next_service_date, date(2025, 11, 1));
        assert_eq!(record.next_service_odometer, 22000);
    }

    #[test]
    fn test_days_remaining_sign() {
        assert_eq!(days_remaining(date(2025, 11, 1), date(2025, 10, 20)), 12);
        assert_eq!(days_remaining(date(2025, 10, 20), date(2025, 11, 1)), -12);
        assert_eq!(days_remaining(date(2025, 1, 1), date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_overdue_by_date_alone() {
        assert_eq!(classify_remaining(-1, 999_999), DueStatus::Overdue);
    }

    #[test]
    fn test_overdue_by_distance_alone() {
        assert_eq!(classify_remaining(999_999, -1), DueStatus::Overdue);
    }

    #[test]
    fn test_overdue_beats_due_today() {
        assert_eq!(classify_remaining(0, -1), DueStatus::Overdue);
        assert_eq!(classify_remaining(-3, 0), DueStatus::Overdue);
    }

    #[test]
    fn test_due_today() {
        assert_eq!(classify_remaining(0, 9999), DueStatus::DueToday);
        assert_eq!(classify_remaining(200, 0), DueStatus::DueToday);
        assert_eq!(classify_remaining(0, 100), DueStatus::DueToday);
    }

    #[test]
    fn test_due_soon_boundaries() {
        assert_eq!(
            classify_remaining(7, 9999),
            DueStatus::DueSoon {
                days_left: 7,
                km_left: 9999
            }
        );
        assert_eq!(
            classify_remaining(8, 9999),
            DueStatus::Ok {
                days_left: 8,
                km_left: 9999
            }
        );
        assert_eq!(
            classify_remaining(300, 500),
            DueStatus::DueSoon {
                days_left: 300,
                km_left: 500
            }
        );
        assert_eq!(
            classify_remaining(300, 501),
            DueStatus::Ok {
                days_left: 300,
                km_left: 501
            }
        );
    }

    #[test]
    fn test_classify_sample_vehicle() {
        let status = classify_status(date(2025, 11, 1), 22000, 21000, date(2025, 10, 20));
        assert_eq!(
            status,
            DueStatus::Ok {
                days_left: 12,
                km_left: 1000
            }
        );
    }

    #[test]
    fn test_classify_odometer_past_due() {
        let status = classify_status(date(2030, 1, 1), 22000, 22001, date(2025, 1, 1));
        assert_eq!(status, DueStatus::Overdue);
    }

    #[test]
    fn test_signed_km_diff_extremes() {
        assert_eq!(signed_km_diff(0, u64::MAX), i64::MIN);
        assert_eq!(signed_km_diff(u64::MAX, 0), i64::MAX);
    }
}
