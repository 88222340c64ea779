//! Domain model types

pub mod status;

pub use status::{DueStatus, Reminder};
