//! Inventory domain module.
//!
//! This crate contains the collection manager over the product model,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod manager;

pub use manager::Inventory;
