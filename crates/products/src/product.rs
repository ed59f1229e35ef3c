use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use materials_core::{Entity, EntityKind, string_id};
use materials_parties::VendorId;

string_id!(
    /// Product identifier (caller supplied).
    ProductId,
    "ProductId"
);

/// Input record: a product to add to the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// Must name an existing vendor when the product is created.
    pub vendor_id: VendorId,
}

/// Stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub vendor_id: VendorId,
    pub created_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;
    type New = NewProduct;

    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn new_id(new: &NewProduct) -> &ProductId {
        &new.id
    }

    fn stamp(new: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            name: new.name,
            description: new.description,
            category: new.category,
            price: new.price,
            vendor_id: new.vendor_id,
            created_at: now,
        }
    }
}
