use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use materials_core::{Entity, EntityKind, string_id};

string_id!(
    /// Seller identifier (caller supplied).
    SellerId,
    "SellerId"
);
string_id!(
    /// Buyer identifier (caller supplied).
    BuyerId,
    "BuyerId"
);
string_id!(
    /// Vendor identifier (caller supplied).
    VendorId,
    "VendorId"
);

/// Input record: a seller to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSeller {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Stored seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Seller {
    type Id = SellerId;
    type New = NewSeller;

    const KIND: EntityKind = EntityKind::Seller;

    fn id(&self) -> &SellerId {
        &self.id
    }

    fn new_id(new: &NewSeller) -> &SellerId {
        &new.id
    }

    fn stamp(new: NewSeller, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            created_at: now,
        }
    }
}

/// Input record: a buyer to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBuyer {
    pub id: BuyerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Stored buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: BuyerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Buyer {
    type Id = BuyerId;
    type New = NewBuyer;

    const KIND: EntityKind = EntityKind::Buyer;

    fn id(&self) -> &BuyerId {
        &self.id
    }

    fn new_id(new: &NewBuyer) -> &BuyerId {
        &new.id
    }

    fn stamp(new: NewBuyer, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            created_at: now,
        }
    }
}

/// Input record: a vendor (supplier of products) to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVendor {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Stored vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Vendor {
    type Id = VendorId;
    type New = NewVendor;

    const KIND: EntityKind = EntityKind::Vendor;

    fn id(&self) -> &VendorId {
        &self.id
    }

    fn new_id(new: &NewVendor) -> &VendorId {
        &new.id
    }

    fn stamp(new: NewVendor, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            created_at: now,
        }
    }
}
