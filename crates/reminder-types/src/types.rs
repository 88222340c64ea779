//! Vehicle service record types

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored service figures for one vehicle.
///
/// The vehicle identifier is the key of the surrounding [`RecordCollection`],
/// so it is not repeated inside the value. `next_service_*` fields are always
/// derived from the `last_service_*` fields when a record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleRecord {
    pub last_service_date: NaiveDate,

    /// Odometer reading (km) at the last service
    #[serde(alias = "last_service_km")]
    pub last_service_odometer: u64,

    /// Odometer reading (km) when the record was written
    #[serde(alias = "current_km")]
    pub current_odometer: u64,

    pub next_service_date: NaiveDate,

    #[serde(alias = "next_service_km")]
    pub next_service_odometer: u64,
}

/// The whole store: vehicle id -> record, iterated in id order
pub type RecordCollection = BTreeMap<String, VehicleRecord>;

/// Raw form input for the add/update path, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInput {
    pub vehicle_id: String,
    pub last_service_date: String,
    pub last_service_odometer: String,
    pub current_odometer: String,
}

/// Advisory raised when the current odometer is behind the last-service reading.
///
/// Never blocks a write; surfaced to the caller next to the saved record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyWarning {
    pub vehicle_id: String,
    pub last_service_odometer: u64,
    pub current_odometer: u64,
}

impl std::fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current km ({}) is less than last service km ({}) for {}. Please check values.",
            self.current_odometer, self.last_service_odometer, self.vehicle_id
        )
    }
}
