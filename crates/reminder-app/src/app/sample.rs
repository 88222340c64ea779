//! Demonstration data

use chrono::NaiveDate;
use reminder_domain::service::derive_record;
use reminder_types::{Error, RecordCollection, Result};

/// (vehicle id, last service date, last service km, current km)
const SAMPLE_VEHICLES: [(&str, (i32, u32, u32), u64, u64); 2] = [
    ("MH01AB1234", (2024, 11, 1), 12000, 21000),
    ("DL8CAF0001", (2024, 6, 15), 45000, 54050),
];

/// Two demo vehicles with derived next-due fields
pub fn sample_records() -> Result<RecordCollection> {
    let mut records = RecordCollection::new();
    for (vehicle_id, (y, m, d), last_km, current_km) in SAMPLE_VEHICLES {
        let last_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| Error::InvalidDate(format!("{y:04}-{m:02}-{d:02}")))?;
        records.insert(
            vehicle_id.to_string(),
            derive_record(last_date, last_km, current_km)?,
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records() {
        let records = sample_records().unwrap();
        assert_eq!(records.len(), 2);

        let mh = &records["MH01AB1234"];
        assert_eq!(mh.next_service_date.to_string(), "2025-11-01");
        assert_eq!(mh.next_service_odometer, 22000);

        let dl = &records["DL8CAF0001"];
        assert_eq!(dl.next_service_date.to_string(), "2025-06-15");
        assert_eq!(dl.next_service_odometer, 55000);
    }
}
