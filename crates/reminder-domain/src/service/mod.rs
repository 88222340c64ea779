//! Domain services

pub mod calculator;
pub mod input;

pub use calculator::{
    classify_status, compute_next_due, compute_next_due_from_input, days_remaining,
    derive_record, NextDue,
};
pub use input::{parse_odometer, parse_service_date, require};

use chrono::{Local, NaiveDate};

/// Today's local calendar date. Only call this at the outer boundary.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
