use chrono::NaiveDate;

use stockroom_core::{InventoryError, InventoryResult, ProductId};
use stockroom_products::Product;

/// The collection manager: owns every product, preserves insertion order,
/// and enforces id uniqueness.
///
/// All failure modes are recoverable outcomes; callers render them and
/// carry on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from an already-ordered sequence, enforcing the
    /// id-uniqueness invariant across it.
    pub fn from_products(products: Vec<Product>) -> InventoryResult<Self> {
        let mut inventory = Self::new();
        for product in products {
            inventory.add_product(product)?;
        }
        Ok(inventory)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Append a product, rejecting duplicate ids. On rejection the
    /// inventory is left unchanged.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        if self.get(product.id()).is_some() {
            return Err(InventoryError::DuplicateProductId(product.id()));
        }
        self.products.push(product);
        Ok(())
    }

    /// Remove the product with the matching id. Not-found is a boolean
    /// outcome, not an error.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match against product names, in
    /// insertion order. Empty on no match.
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive match against the variant discriminator
    /// ("Electronics" | "Grocery" | "Clothing"), in insertion order.
    pub fn search_by_type(&self, tag: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.kind_tag().eq_ignore_ascii_case(tag.trim()))
            .collect()
    }

    /// The full sequence, insertion order, unchanged.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Sell `quantity` units of the identified product. Ok carries the
    /// remaining stock; not-found and insufficient-stock come back as
    /// recoverable errors.
    pub fn sell_product(&mut self, id: ProductId, quantity: u32) -> InventoryResult<u32> {
        let product = self.get_mut(id)?;
        product.sell(quantity)?;
        Ok(product.quantity_in_stock())
    }

    /// Restock `quantity` units of the identified product. Ok carries the
    /// new stock level.
    pub fn restock_product(&mut self, id: ProductId, quantity: u32) -> InventoryResult<u32> {
        let product = self.get_mut(id)?;
        product.restock(quantity);
        Ok(product.quantity_in_stock())
    }

    /// Sum of `price * stock` over all products; 0 when empty.
    pub fn total_inventory_value(&self) -> u64 {
        self.products.iter().map(Product::total_value).sum()
    }

    /// Remove every grocery product whose expiry date lies strictly before
    /// `reference`, returning the removed items for reporting. Non-grocery
    /// products are never considered.
    pub fn remove_expired_products(&mut self, reference: NaiveDate) -> Vec<Product> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.products.len());
        for product in self.products.drain(..) {
            if product.is_expired(reference) {
                removed.push(product);
            } else {
                kept.push(product);
            }
        }
        self.products = kept;
        removed
    }

    fn get_mut(&mut self, id: ProductId) -> InventoryResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(InventoryError::ProductNotFound(id))
    }
}
