//! Reminder Service - add, update, list, backup, restore
//!
//! Every write goes through the same path:
//! 1. Check required fields
//! 2. Parse date and odometer readings
//! 3. Derive next-due date and odometer
//! 4. Replace the record in the loaded collection and save the whole collection

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use reminder_domain::model::Reminder;
use reminder_domain::repository::RecordStore;
use reminder_domain::service::{classify_status, derive_record, parse_odometer, parse_service_date, require};
use reminder_infra::service_csv;
use reminder_types::{ConsistencyWarning, Error, Result, ServiceInput, VehicleRecord};
use serde::Serialize;
use tracing::{debug, info};

use super::sample::sample_records;

/// Result of a successful add or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub vehicle_id: String,
    pub record: VehicleRecord,
    /// Advisories that did not block the write
    pub warnings: Vec<ConsistencyWarning>,
}

/// Validated and computed form input
struct ComputedEntry {
    vehicle_id: String,
    record: VehicleRecord,
}

/// Use cases over an injected record store
pub struct ReminderService<S> {
    store: S,
}

impl<S: RecordStore> ReminderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a vehicle, replacing any existing record with the same id.
    ///
    /// A current odometer behind the last-service reading is reported as a
    /// [`ConsistencyWarning`] but the record is still saved.
    pub fn add_vehicle(&self, input: &ServiceInput) -> Result<SaveOutcome> {
        let entry = compute_entry(input)?;

        let mut warnings = Vec::new();
        if entry.record.current_odometer < entry.record.last_service_odometer {
            warnings.push(ConsistencyWarning {
                vehicle_id: entry.vehicle_id.clone(),
                last_service_odometer: entry.record.last_service_odometer,
                current_odometer: entry.record.current_odometer,
            });
        }

        let mut records = self.store.load()?;
        records.insert(entry.vehicle_id.clone(), entry.record.clone());
        self.store.save(&records)?;

        info!(
            vehicle = %entry.vehicle_id,
            next_date = %entry.record.next_service_date,
            next_km = entry.record.next_service_odometer,
            "vehicle added"
        );
        Ok(SaveOutcome {
            vehicle_id: entry.vehicle_id,
            record: entry.record,
            warnings,
        })
    }

    /// Replace all fields of an existing vehicle's record
    pub fn update_vehicle(&self, input: &ServiceInput) -> Result<SaveOutcome> {
        let entry = compute_entry(input)?;

        let mut records = self.store.load()?;
        if !records.contains_key(&entry.vehicle_id) {
            return Err(Error::VehicleNotFound(entry.vehicle_id));
        }
        records.insert(entry.vehicle_id.clone(), entry.record.clone());
        self.store.save(&records)?;

        info!(vehicle = %entry.vehicle_id, "vehicle updated");
        Ok(SaveOutcome {
            vehicle_id: entry.vehicle_id,
            record: entry.record,
            warnings: Vec::new(),
        })
    }

    /// All records classified against `reference_date`, sorted by vehicle id
    pub fn list_reminders(&self, reference_date: NaiveDate) -> Result<Vec<Reminder>> {
        let records = self.store.load()?;
        Ok(records
            .into_iter()
            .map(|(vehicle_id, record)| to_reminder(vehicle_id, record, reference_date))
            .collect())
    }

    pub fn reminder(&self, vehicle_id: &str, reference_date: NaiveDate) -> Result<Reminder> {
        let mut records = self.store.load()?;
        let record = records
            .remove(vehicle_id)
            .ok_or_else(|| Error::VehicleNotFound(vehicle_id.to_string()))?;
        Ok(to_reminder(vehicle_id.to_string(), record, reference_date))
    }

    /// Write the tabular export. Returns the number of rows written.
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let records = self.store.load()?;
        if records.is_empty() {
            return Err(Error::NothingToExport);
        }
        service_csv::export_csv(&records, path)?;
        info!(path = %path.display(), rows = records.len(), "exported csv");
        Ok(records.len())
    }

    /// Copy the full persisted collection to `path`
    pub fn backup(&self, path: &Path) -> Result<usize> {
        let records = self.store.load()?;
        let blob = self.store.export_to(&records)?;
        fs::write(path, blob)?;
        info!(path = %path.display(), count = records.len(), "backup written");
        Ok(records.len())
    }

    /// Replace the whole store with the collection in `path`.
    ///
    /// The blob is fully parsed before anything is saved, so a bad file
    /// leaves the store as it was.
    pub fn restore(&self, path: &Path) -> Result<usize> {
        let blob = fs::read_to_string(path)?;
        let records = self.store.import_from(&blob)?;
        self.store.save(&records)?;
        info!(path = %path.display(), count = records.len(), "store restored");
        Ok(records.len())
    }

    /// Delete every record
    pub fn clear(&self) -> Result<()> {
        self.store.save(&Default::default())?;
        info!("store cleared");
        Ok(())
    }

    /// Replace the store with the demonstration vehicles
    pub fn load_sample_data(&self) -> Result<usize> {
        let records = sample_records()?;
        self.store.save(&records)?;
        debug!(count = records.len(), "sample data saved");
        Ok(records.len())
    }
}

fn compute_entry(input: &ServiceInput) -> Result<ComputedEntry> {
    let vehicle_id = require(&input.vehicle_id, "Vehicle number")?;
    let last_date = require(&input.last_service_date, "Last service date")?;
    let last_km = require(&input.last_service_odometer, "Last service km")?;
    let current_km = require(&input.current_odometer, "Current km")?;

    let last_service_date = parse_service_date(last_date)?;
    let last_service_odometer = parse_odometer(last_km)?;
    let current_odometer = parse_odometer(current_km)?;

    Ok(ComputedEntry {
        vehicle_id: vehicle_id.to_string(),
        record: derive_record(last_service_date, last_service_odometer, current_odometer)?,
    })
}

fn to_reminder(vehicle_id: String, record: VehicleRecord, reference_date: NaiveDate) -> Reminder {
    let status = classify_status(
        record.next_service_date,
        record.next_service_odometer,
        record.current_odometer,
        reference_date,
    );
    Reminder {
        vehicle_id,
        record,
        status,
    }
}
