//! Due-status classification results

use reminder_types::VehicleRecord;
use serde::{Deserialize, Serialize};

/// How close a vehicle is to its next required service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DueStatus {
    /// Past the due date or the due odometer
    Overdue,
    /// Due date is today or the due odometer is reached exactly
    DueToday,
    /// Within 7 days or 500 km of being due
    DueSoon { days_left: i64, km_left: i64 },
    /// Nothing due yet
    Ok { days_left: i64, km_left: i64 },
}

impl DueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "SERVICE OVERDUE",
            DueStatus::DueToday => "SERVICE DUE TODAY",
            DueStatus::DueSoon { .. } => "DUE SOON",
            DueStatus::Ok { .. } => "OK",
        }
    }

    /// Whether the vehicle needs attention now or within the due-soon window
    pub fn needs_attention(&self) -> bool {
        !matches!(self, DueStatus::Ok { .. })
    }
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueStatus::Overdue => write!(f, "⚠️ {}", self.label()),
            DueStatus::DueToday => write!(f, "⚠️ {}", self.label()),
            DueStatus::DueSoon { days_left, km_left } => write!(
                f,
                "⏳ {} (Time left: {} days, KM left: {})",
                self.label(),
                days_left,
                km_left
            ),
            DueStatus::Ok { days_left, km_left } => write!(
                f,
                "✓ {} (Time left: {} days, KM left: {})",
                self.label(),
                days_left,
                km_left
            ),
        }
    }
}

/// A stored record together with its classification on a reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub vehicle_id: String,
    pub record: VehicleRecord,
    pub status: DueStatus,
}
