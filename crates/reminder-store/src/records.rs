//! JSON file store for vehicle service records

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reminder_domain::repository::{decode_collection, RecordStore};
use reminder_types::{Error, RecordCollection, Result};
use tracing::debug;
use uuid::Uuid;

/// Default file name inside the store directory
pub const STORE_FILE_NAME: &str = "vehicle_service.json";

/// Whole-collection store backed by one pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    store_path: PathBuf,
}

impl JsonFileStore {
    /// Open a store in `store_dir`, creating the directory if needed.
    /// The data file itself is only created on the first save.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join(STORE_FILE_NAME),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<RecordCollection> {
        let content = match fs::read_to_string(&self.store_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.store_path.display(), "no store file yet");
                return Ok(RecordCollection::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records = decode_collection(&content).map_err(|e| match e {
            Error::MalformedData(msg) => {
                Error::MalformedData(format!("{}: {}", self.store_path.display(), msg))
            }
            other => other,
        })?;
        debug!(path = %self.store_path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&self, records: &RecordCollection) -> Result<()> {
        let content = self.export_to(records)?;

        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a sibling tmp file, then rename over the target.
        let tmp_path = self
            .store_path
            .with_file_name(format!(".{}-{}.tmp", STORE_FILE_NAME, Uuid::new_v4()));
        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &self.store_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(path = %self.store_path.display(), count = records.len(), "saved records");
        Ok(())
    }
}
