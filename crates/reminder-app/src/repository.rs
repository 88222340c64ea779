//! Store handles for the application layer

use reminder_store::JsonFileStore;
use reminder_types::Result;

use crate::config::Config;

/// Open the record store at the configured location
pub fn open_record_store(config: &Config) -> Result<JsonFileStore> {
    let store_dir = config.store_dir()?;
    JsonFileStore::open(store_dir)
}
