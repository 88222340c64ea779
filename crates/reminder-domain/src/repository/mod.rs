//! Repository trait definitions for data persistence

use reminder_types::{Error, RecordCollection, Result};

/// Durable storage of the whole `vehicle_id -> VehicleRecord` mapping.
///
/// Reads and writes always cover the entire collection; there is no
/// per-record access.
pub trait RecordStore {
    /// Load the persisted collection, or an empty one if nothing is stored yet
    fn load(&self) -> Result<RecordCollection>;

    /// Replace the persisted collection with `records`
    fn save(&self, records: &RecordCollection) -> Result<()>;

    /// Parse an external backup blob in the persisted shape
    fn import_from(&self, blob: &str) -> Result<RecordCollection> {
        decode_collection(blob)
    }

    /// Serialize a collection into a backup blob
    fn export_to(&self, records: &RecordCollection) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}

/// Parse a serialized collection, rejecting blank vehicle ids
pub fn decode_collection(blob: &str) -> Result<RecordCollection> {
    let records: RecordCollection =
        serde_json::from_str(blob).map_err(|e| Error::MalformedData(e.to_string()))?;
    if records.keys().any(|id| id.trim().is_empty()) {
        return Err(Error::MalformedData("blank vehicle id".to_string()));
    }
    Ok(records)
}
