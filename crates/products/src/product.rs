use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, ProductId};

use crate::date;

/// The closed set of product variants, discriminated on the wire by the
/// `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductKind {
    Electronics {
        warranty_years: u32,
        brand: String,
    },
    Grocery {
        #[serde(with = "date::wire")]
        expiry_date: NaiveDate,
    },
    Clothing {
        size: String,
        material: String,
    },
}

impl ProductKind {
    /// The wire discriminator for this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            ProductKind::Electronics { .. } => "Electronics",
            ProductKind::Grocery { .. } => "Grocery",
            ProductKind::Clothing { .. } => "Clothing",
        }
    }
}

/// Flat wire shape: the common fields plus the tagged variant fields,
/// all in one JSON object.
#[derive(Serialize, Deserialize)]
struct ProductRecord {
    product_id: ProductId,
    name: String,
    price: u64,
    quantity_in_stock: u32,
    #[serde(flatten)]
    kind: ProductKind,
}

/// A catalog product: common fields plus one [`ProductKind`] variant.
///
/// Invariants: the id is positive, the name is non-empty, and stock never
/// goes negative (a sell that would violate this is rejected, not
/// clamped). Valid by construction — both [`Product::new`] and the serde
/// path go through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: u64,
    quantity_in_stock: u32,
    kind: ProductKind,
}

impl Product {
    /// Create a product, validating the common-field invariants.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u64,
        quantity_in_stock: u32,
        kind: ProductKind,
    ) -> InventoryResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            price,
            quantity_in_stock,
            kind,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// The wire discriminator of this product's variant.
    pub fn kind_tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Add `amount` units to stock. No upper bound.
    ///
    /// Callers are expected to reject non-positive amounts before calling;
    /// `restock(0)` is a harmless no-op here.
    pub fn restock(&mut self, amount: u32) {
        self.quantity_in_stock = self.quantity_in_stock.saturating_add(amount);
    }

    /// Remove `quantity` units from stock, all or nothing.
    pub fn sell(&mut self, quantity: u32) -> InventoryResult<()> {
        if quantity > self.quantity_in_stock {
            return Err(InventoryError::insufficient_stock(
                &self.name,
                quantity,
                self.quantity_in_stock,
            ));
        }
        self.quantity_in_stock -= quantity;
        Ok(())
    }

    /// Unit price times units in stock.
    pub fn total_value(&self) -> u64 {
        self.price * u64::from(self.quantity_in_stock)
    }

    /// Expiry date, for grocery products only.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        match &self.kind {
            ProductKind::Grocery { expiry_date } => Some(*expiry_date),
            _ => None,
        }
    }

    /// True iff this is a grocery product whose expiry date lies strictly
    /// before `reference`. Non-grocery products never expire.
    pub fn is_expired(&self, reference: NaiveDate) -> bool {
        match self.expiry_date() {
            Some(expiry) => expiry < reference,
            None => false,
        }
    }

    /// [`Product::is_expired`] against today's UTC calendar date.
    pub fn is_expired_now(&self) -> bool {
        self.is_expired(Utc::now().date_naive())
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = InventoryError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.product_id,
            record.name,
            record.price,
            record.quantity_in_stock,
            record.kind,
        )
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            price: product.price,
            quantity_in_stock: product.quantity_in_stock,
            kind: product.kind,
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name: {} | ID: {} | Price: {} | Stock: {}",
            self.name, self.id, self.price, self.quantity_in_stock
        )?;
        match &self.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => write!(f, " | Warranty: {warranty_years} years | Brand: {brand}"),
            ProductKind::Grocery { expiry_date } => {
                write!(f, " | Expiry: {}", date::format_date(*expiry_date))
            }
            ProductKind::Clothing { size, material } => {
                write!(f, " | Size: {size} | Material: {material}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pid(raw: u32) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    fn electronics(raw_id: u32, stock: u32) -> Product {
        Product::new(
            pid(raw_id),
            "Laptop",
            1500,
            stock,
            ProductKind::Electronics {
                warranty_years: 2,
                brand: "Lenovo".to_string(),
            },
        )
        .unwrap()
    }

    fn grocery(raw_id: u32, expiry: &str) -> Product {
        Product::new(
            pid(raw_id),
            "Milk",
            3,
            2,
            ProductKind::Grocery {
                expiry_date: date::parse_date(expiry).unwrap(),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Product::new(
            pid(1),
            "   ",
            10,
            1,
            ProductKind::Clothing {
                size: "M".to_string(),
                material: "cotton".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn sell_then_restock_restores_stock() {
        let mut product = electronics(1, 10);
        product.sell(4).unwrap();
        assert_eq!(product.quantity_in_stock(), 6);
        product.restock(4);
        assert_eq!(product.quantity_in_stock(), 10);
    }

    #[test]
    fn oversell_is_rejected_and_stock_unchanged() {
        let mut product = electronics(1, 10);
        let err = product.sell(15).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                name: "Laptop".to_string(),
                requested: 15,
                available: 10,
            }
        );
        assert_eq!(product.quantity_in_stock(), 10);
    }

    #[test]
    fn selling_entire_stock_is_allowed() {
        let mut product = electronics(1, 10);
        product.sell(10).unwrap();
        assert_eq!(product.quantity_in_stock(), 0);
    }

    #[test]
    fn total_value_is_price_times_stock() {
        assert_eq!(electronics(1, 10).total_value(), 15_000);
        assert_eq!(electronics(1, 0).total_value(), 0);
    }

    #[test]
    fn expiry_applies_to_grocery_only() {
        let old = grocery(2, "01/01/2020");
        let reference = date::parse_date("01/01/2025").unwrap();
        assert!(old.is_expired(reference));
        assert!(!old.is_expired(date::parse_date("01/01/2020").unwrap()));
        assert!(!electronics(1, 10).is_expired(reference));
    }

    #[test]
    fn describe_includes_variant_fields() {
        let text = electronics(1, 10).to_string();
        assert_eq!(
            text,
            "Name: Laptop | ID: 1 | Price: 1500 | Stock: 10 | Warranty: 2 years | Brand: Lenovo"
        );
        let text = grocery(2, "05/11/2026").to_string();
        assert_eq!(text, "Name: Milk | ID: 2 | Price: 3 | Stock: 2 | Expiry: 05/11/2026");
    }

    #[test]
    fn wire_format_is_flat_and_type_tagged() {
        let value = serde_json::to_value(electronics(1, 10)).unwrap();
        assert_eq!(
            value,
            json!({
                "product_id": 1,
                "name": "Laptop",
                "price": 1500,
                "quantity_in_stock": 10,
                "type": "Electronics",
                "warranty_years": 2,
                "brand": "Lenovo",
            })
        );

        let value = serde_json::to_value(grocery(2, "01/01/2020")).unwrap();
        assert_eq!(
            value,
            json!({
                "product_id": 2,
                "name": "Milk",
                "price": 3,
                "quantity_in_stock": 2,
                "type": "Grocery",
                "expiry_date": "01/01/2020",
            })
        );
    }

    #[test]
    fn decode_rejects_missing_variant_field() {
        let raw = json!({
            "product_id": 1,
            "name": "Laptop",
            "price": 1500,
            "quantity_in_stock": 10,
            "type": "Electronics",
            "warranty_years": 2,
        });
        assert!(serde_json::from_value::<Product>(raw).is_err());
    }

    #[test]
    fn decode_rejects_unknown_type_tag() {
        let raw = json!({
            "product_id": 1,
            "name": "Gadget",
            "price": 5,
            "quantity_in_stock": 1,
            "type": "Furniture",
        });
        assert!(serde_json::from_value::<Product>(raw).is_err());
    }

    #[test]
    fn decode_rejects_zero_id_and_blank_name() {
        let zero_id = json!({
            "product_id": 0,
            "name": "Laptop",
            "price": 1500,
            "quantity_in_stock": 10,
            "type": "Clothing",
            "size": "M",
            "material": "wool",
        });
        assert!(serde_json::from_value::<Product>(zero_id).is_err());

        let blank_name = json!({
            "product_id": 1,
            "name": "",
            "price": 1500,
            "quantity_in_stock": 10,
            "type": "Clothing",
            "size": "M",
            "material": "wool",
        });
        assert!(serde_json::from_value::<Product>(blank_name).is_err());
    }

    #[test]
    fn decode_rejects_malformed_expiry_date() {
        let raw = json!({
            "product_id": 2,
            "name": "Milk",
            "price": 3,
            "quantity_in_stock": 2,
            "type": "Grocery",
            "expiry_date": "2020-01-01",
        });
        assert!(serde_json::from_value::<Product>(raw).is_err());
    }

    #[test]
    fn round_trips_every_variant() {
        let products = vec![
            electronics(1, 10),
            grocery(2, "28/02/2023"),
            Product::new(
                pid(3),
                "Jumper",
                40,
                7,
                ProductKind::Clothing {
                    size: "L".to_string(),
                    material: "wool".to_string(),
                },
            )
            .unwrap(),
        ];
        for product in products {
            let encoded = serde_json::to_string(&product).unwrap();
            let decoded: Product = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, product);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: sell(q) followed by restock(q) restores stock exactly.
            #[test]
            fn sell_then_restock_is_identity(stock in 0u32..10_000, sold in 0u32..10_000) {
                let mut product = electronics(1, stock);
                if product.sell(sold).is_ok() {
                    product.restock(sold);
                }
                prop_assert_eq!(product.quantity_in_stock(), stock);
            }

            /// Property: a rejected sell reports the true availability and
            /// leaves stock untouched.
            #[test]
            fn rejected_sell_reports_availability(stock in 0u32..1_000, extra in 1u32..1_000) {
                let mut product = electronics(1, stock);
                let err = product.sell(stock + extra).unwrap_err();
                prop_assert_eq!(
                    err,
                    InventoryError::InsufficientStock {
                        name: "Laptop".to_string(),
                        requested: stock + extra,
                        available: stock,
                    }
                );
                prop_assert_eq!(product.quantity_in_stock(), stock);
            }

            /// Property: valuation is exact integer arithmetic.
            #[test]
            fn total_value_matches_definition(price in 0u64..1_000_000, stock in 0u32..100_000) {
                let product = Product::new(
                    pid(1),
                    "Widget",
                    price,
                    stock,
                    ProductKind::Clothing {
                        size: "M".to_string(),
                        material: "cotton".to_string(),
                    },
                ).unwrap();
                prop_assert_eq!(product.total_value(), price * u64::from(stock));
            }
        }
    }
}
