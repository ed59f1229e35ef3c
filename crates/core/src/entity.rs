//! Entity trait: identity, kind, and server-side stamping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five entity kinds held by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Seller,
    Buyer,
    Vendor,
    Product,
    InventoryItem,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Seller,
        EntityKind::Buyer,
        EntityKind::Vendor,
        EntityKind::Product,
        EntityKind::InventoryItem,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Seller => "seller",
            EntityKind::Buyer => "buyer",
            EntityKind::Vendor => "vendor",
            EntityKind::Product => "product",
            EntityKind::InventoryItem => "inventory item",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored record with a caller-supplied identity.
///
/// `New` is the caller-populated input (everything except server-set fields). The
/// store turns it into `Self` with [`Entity::stamp`] at insertion time.
pub trait Entity: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync;

    /// Caller-populated input record.
    type New: core::fmt::Debug + Send;

    const KIND: EntityKind;

    fn id(&self) -> &Self::Id;

    /// Identifier carried by an input record (checked for uniqueness before stamping).
    fn new_id(new: &Self::New) -> &Self::Id;

    /// Build the stored record, setting server-side timestamps to `now`.
    fn stamp(new: Self::New, now: DateTime<Utc>) -> Self;
}
