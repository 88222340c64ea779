//! Use cases called by the presentation shell

pub mod reminder_service;
pub mod sample;

pub use reminder_service::{ReminderService, SaveOutcome};
