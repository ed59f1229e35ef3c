use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use materials_core::{Entity, EntityKind, string_id};
use materials_products::ProductId;

string_id!(
    /// Inventory item identifier (caller supplied).
    InventoryItemId,
    "InventoryItemId"
);

/// Input record: stock of one product at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub id: InventoryItemId,
    /// Must name an existing product when the item is created.
    pub product_id: ProductId,
    /// Signed; negative stock is representable and not rejected here.
    pub quantity: i64,
    pub location: String,
}

/// Stored inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub location: String,
    /// Set on creation, advanced on every quantity update.
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Overwrite the quantity and advance `updated_at`.
    ///
    /// `updated_at` never moves backwards: if `now` is earlier than the current
    /// stamp (wall clock stepped back), the current stamp is kept.
    pub fn set_quantity(&mut self, quantity: i64, now: DateTime<Utc>) {
        self.quantity = quantity;
        self.updated_at = self.updated_at.max(now);
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;
    type New = NewInventoryItem;

    const KIND: EntityKind = EntityKind::InventoryItem;

    fn id(&self) -> &InventoryItemId {
        &self.id
    }

    fn new_id(new: &NewInventoryItem) -> &InventoryItemId {
        &new.id
    }

    fn stamp(new: NewInventoryItem, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            product_id: new.product_id,
            quantity: new.quantity,
            location: new.location,
            updated_at: now,
        }
    }
}

/// Request to overwrite the quantity of an existing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub id: InventoryItemId,
    pub quantity: i64,
}
