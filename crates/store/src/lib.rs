//! Persistence for the inventory: a JSON array codec plus whole-file
//! save/load helpers.
//!
//! Loading is tolerant per entry (one malformed record is skipped and
//! reported, never failing the batch) and strict at the top level
//! (malformed JSON or IO failures surface as [`StoreError`]).

pub mod codec;
pub mod file;

pub use codec::{LoadReport, SkippedRecord, StoreError, from_json, to_json};
pub use file::{load_from_path, load_or_empty, save_to_path};
