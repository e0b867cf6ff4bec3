//! JSON array codec for the product collection.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use stockroom_core::InventoryError;
use stockroom_inventory::Inventory;
use stockroom_products::Product;

/// Store-level error: IO or a top-level document that is not a JSON array.
///
/// Per-entry problems never surface here; they land in
/// [`LoadReport::skipped`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("inventory file io: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed inventory file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A record that could not be loaded, with its position in the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: InventoryError,
}

/// Outcome of a load: everything that decoded cleanly, plus a report of
/// what did not.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub inventory: Inventory,
    pub skipped: Vec<SkippedRecord>,
}

/// Encode the full product list as a JSON array, insertion order.
///
/// An empty inventory encodes to `[]`.
pub fn to_json(inventory: &Inventory) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(inventory.list_all())?)
}

/// Decode a JSON array of product records.
///
/// Each element is validated independently: missing fields, an
/// unrecognized `type` tag, a malformed expiry date, or a duplicate id
/// skip that element (reported in the result) and the rest of the batch
/// still loads. A document that is not a JSON array is a [`StoreError`].
pub fn from_json(raw: &str) -> Result<LoadReport, StoreError> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;

    let mut report = LoadReport::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let product = match serde_json::from_value::<Product>(entry) {
            Ok(product) => product,
            Err(err) => {
                let reason = InventoryError::invalid_data(err.to_string());
                warn!(index, %reason, "skipping unreadable inventory record");
                report.skipped.push(SkippedRecord { index, reason });
                continue;
            }
        };
        if let Err(reason) = report.inventory.add_product(product) {
            warn!(index, %reason, "skipping conflicting inventory record");
            report.skipped.push(SkippedRecord { index, reason });
        }
    }
    Ok(report)
}
