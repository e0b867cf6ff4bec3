//! Whole-file save/load around the JSON codec.
//!
//! Saves overwrite the target file with the full product list every call;
//! there is no incremental mode.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use stockroom_inventory::Inventory;

use crate::codec::{LoadReport, StoreError, from_json, to_json};

/// Overwrite `path` with the full current product list.
pub fn save_to_path(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    fs::write(path, to_json(inventory)?)?;
    info!(path = %path.display(), products = inventory.len(), "inventory saved");
    Ok(())
}

/// Read and decode `path`. Per-entry problems land in the report; IO and
/// top-level JSON failures are errors.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LoadReport, StoreError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let report = from_json(&raw)?;
    info!(
        path = %path.as_ref().display(),
        products = report.inventory.len(),
        skipped = report.skipped.len(),
        "inventory loaded"
    );
    Ok(report)
}

/// Degrading load: an unreadable or malformed file is reported as a
/// warning and yields an empty inventory instead of an error.
pub fn load_or_empty(path: impl AsRef<Path>) -> LoadReport {
    match load_from_path(path.as_ref()) {
        Ok(report) => report,
        Err(err) => {
            warn!(path = %path.as_ref().display(), %err, "starting with an empty inventory");
            LoadReport {
                inventory: Inventory::new(),
                skipped: Vec::new(),
            }
        }
    }
}
