//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a product.
///
/// A positive integer, unique within an inventory for its lifetime. The
/// core never assigns these; callers own the allocation policy (typically
/// max existing id + 1). Deserialization goes through [`ProductId::new`],
/// so a zero id is rejected at decode time as well.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProductId(u32);

impl ProductId {
    /// Create an identifier from a raw positive integer.
    ///
    /// Zero is rejected; ids start at 1.
    pub fn new(raw: u32) -> Result<Self, InventoryError> {
        if raw == 0 {
            return Err(InventoryError::validation("product id must be positive"));
        }
        Ok(Self(raw))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ProductId {
    type Error = InventoryError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|e| InventoryError::validation(format!("ProductId: {e}")))?;
        Self::new(raw)
    }
}
