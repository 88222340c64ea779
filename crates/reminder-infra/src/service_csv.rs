//! Flattened CSV export of the record collection
//!
//! One row per vehicle in id order. Values are written unquoted; vehicle ids
//! are assumed not to contain commas.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use reminder_types::{Error, RecordCollection, Result};
use tracing::debug;

pub const CSV_HEADER: [&str; 6] = [
    "vehicle",
    "last_service_date",
    "last_service_km",
    "current_km",
    "next_service_date",
    "next_service_km",
];

/// Write the header row and one row per vehicle to `writer`
pub fn write_csv<W: Write>(records: &RecordCollection, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER).map_err(csv_error)?;
    for (vehicle_id, record) in records {
        wtr.write_record([
            vehicle_id.clone(),
            record.last_service_date.to_string(),
            record.last_service_odometer.to_string(),
            record.current_odometer.to_string(),
            record.next_service_date.to_string(),
            record.next_service_odometer.to_string(),
        ])
        .map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export to a file, replacing it if present
pub fn export_csv(records: &RecordCollection, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(records, file)?;
    debug!(path = %path.display(), rows = records.len(), "wrote csv export");
    Ok(())
}

fn csv_error(e: csv::Error) -> Error {
    Error::Export(e.to_string())
}
