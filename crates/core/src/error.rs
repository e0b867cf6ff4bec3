//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable business failures
/// (validation, stock invariants, lookups). File and top-level codec
/// failures belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A sell would take stock negative. The sell is rejected, not clamped.
    #[error("insufficient stock for '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// Another product already holds this identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// No product carries the requested identifier.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A persisted record could not be turned into a product.
    #[error("invalid product data: {0}")]
    InvalidProductData(String),

    /// A date string did not match the `DD/MM/YYYY` wire format.
    #[error("invalid date format: '{0}' (expected DD/MM/YYYY)")]
    InvalidDateFormat(String),

    /// A value failed validation (e.g. empty name, zero id).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl InventoryError {
    pub fn insufficient_stock(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidProductData(msg.into())
    }

    pub fn invalid_date(raw: impl Into<String>) -> Self {
        Self::InvalidDateFormat(raw.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
