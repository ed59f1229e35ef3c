use chrono::Utc;

use materials_core::{Entity, StoreResult};
use materials_inventory::{InventoryItem, InventoryItemId};
use materials_parties::{Buyer, Seller, Vendor};
use materials_products::Product;

use crate::table::Table;

/// All entity state, one table per kind.
///
/// Only reachable through a [`Store`](crate::Store) critical section, so every
/// method here runs with the store lock held.
#[derive(Debug, Default)]
pub struct Tables {
    sellers: Table<Seller>,
    buyers: Table<Buyer>,
    vendors: Table<Vendor>,
    products: Table<Product>,
    inventory: Table<InventoryItem>,
}

/// Entity kinds that have a table in [`Tables`].
pub trait Stored: Entity {
    fn table(tables: &Tables) -> &Table<Self>;
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

macro_rules! impl_stored {
    ($t:ty, $field:ident) => {
        impl Stored for $t {
            fn table(tables: &Tables) -> &Table<Self> {
                &tables.$field
            }

            fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
                &mut tables.$field
            }
        }
    };
}

impl_stored!(Seller, sellers);
impl_stored!(Buyer, buyers);
impl_stored!(Vendor, vendors);
impl_stored!(Product, products);
impl_stored!(InventoryItem, inventory);

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record, stamping its server-side timestamp with the current time.
    pub fn create<E: Stored>(&mut self, new: E::New) -> StoreResult<E> {
        let kind = E::KIND;
        let stored = E::table_mut(self).insert(new, Utc::now());
        match &stored {
            Ok(rec) => tracing::debug!(%kind, id = %rec.id(), "record created"),
            Err(e) => tracing::debug!(%kind, "create rejected: {e}"),
        }
        stored
    }

    pub fn get<E: Stored>(&self, id: &E::Id) -> StoreResult<E> {
        E::table(self).get(id)
    }

    pub fn contains<E: Stored>(&self, id: &E::Id) -> bool {
        E::table(self).contains(id)
    }

    pub fn list<E: Stored>(&self) -> Vec<E> {
        E::table(self).list()
    }

    pub fn len<E: Stored>(&self) -> usize {
        E::table(self).len()
    }

    /// Overwrite an inventory item's quantity and advance its `updated_at`.
    pub fn update_quantity(&mut self, id: &InventoryItemId, quantity: i64) -> StoreResult<()> {
        let item = self.inventory.get_mut(id)?;
        item.set_quantity(quantity, Utc::now());
        tracing::debug!(id = %id, quantity, "inventory quantity updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use materials_core::{EntityKind, StoreError};
    use materials_inventory::NewInventoryItem;
    use materials_parties::{BuyerId, NewBuyer, NewSeller, NewVendor, SellerId, VendorId};
    use materials_products::{NewProduct, ProductId};

    fn new_seller(id: &str) -> NewSeller {
        NewSeller {
            id: SellerId::new(id).unwrap(),
            name: format!("Seller {id}"),
            email: format!("{id}@sellers.test"),
            phone: "555-0101".to_string(),
        }
    }

    fn new_buyer(id: &str) -> NewBuyer {
        NewBuyer {
            id: BuyerId::new(id).unwrap(),
            name: format!("Buyer {id}"),
            email: format!("{id}@buyers.test"),
            phone: "555-0102".to_string(),
            address: "2 Yard Ln".to_string(),
        }
    }

    fn new_vendor(id: &str) -> NewVendor {
        NewVendor {
            id: VendorId::new(id).unwrap(),
            name: format!("Vendor {id}"),
            email: format!("{id}@vendors.test"),
            phone: "555-0103".to_string(),
            address: "3 Mill St".to_string(),
        }
    }

    fn new_product(id: &str, vendor: &str) -> NewProduct {
        NewProduct {
            id: ProductId::new(id).unwrap(),
            name: format!("Product {id}"),
            description: "bagged cement".to_string(),
            category: "cement".to_string(),
            price: 12.5,
            vendor_id: VendorId::new(vendor).unwrap(),
        }
    }

    fn new_item(id: &str, product: &str, quantity: i64) -> NewInventoryItem {
        NewInventoryItem {
            id: InventoryItemId::new(id).unwrap(),
            product_id: ProductId::new(product).unwrap(),
            quantity,
            location: "Warehouse A".to_string(),
        }
    }

    /// Second create with the same id fails and leaves the first record in place.
    fn assert_unique<E: Stored + PartialEq>(first: E::New, dup: E::New) {
        let mut tables = Tables::new();
        let stored = tables.create::<E>(first).unwrap();

        let err = tables.create::<E>(dup).unwrap_err();
        assert_eq!(err, StoreError::already_exists(E::KIND, stored.id()));

        assert_eq!(tables.get::<E>(stored.id()).unwrap(), stored);
        assert_eq!(tables.len::<E>(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected_for_every_kind() {
        let mut other_seller = new_seller("s1");
        other_seller.name = "Impostor".to_string();
        assert_unique::<Seller>(new_seller("s1"), other_seller);

        assert_unique::<Buyer>(new_buyer("b1"), new_buyer("b1"));
        assert_unique::<Vendor>(new_vendor("v1"), new_vendor("v1"));
        assert_unique::<Product>(new_product("p1", "v1"), new_product("p1", "v2"));
        assert_unique::<InventoryItem>(new_item("i1", "p1", 10), new_item("i1", "p1", 99));
    }

    #[test]
    fn same_id_in_different_kinds_does_not_collide() {
        let mut tables = Tables::new();
        tables.create::<Seller>(new_seller("x")).unwrap();
        tables.create::<Buyer>(new_buyer("x")).unwrap();
        tables.create::<Vendor>(new_vendor("x")).unwrap();
        tables.create::<Product>(new_product("x", "x")).unwrap();
        tables.create::<InventoryItem>(new_item("x", "x", 1)).unwrap();
    }

    #[test]
    fn get_unknown_id_is_not_found_for_every_kind() {
        let tables = Tables::new();

        let err = tables.get::<Seller>(&SellerId::new("nope").unwrap()).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::Seller, "nope"));
        assert!(tables.get::<Buyer>(&BuyerId::new("nope").unwrap()).unwrap_err().is_not_found());
        assert!(tables.get::<Vendor>(&VendorId::new("nope").unwrap()).unwrap_err().is_not_found());
        assert!(tables.get::<Product>(&ProductId::new("nope").unwrap()).unwrap_err().is_not_found());
        assert!(
            tables
                .get::<InventoryItem>(&InventoryItemId::new("nope").unwrap())
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn create_returns_stamped_record() {
        let mut tables = Tables::new();
        let before = Utc::now();

        let vendor = tables.create::<Vendor>(new_vendor("v1")).unwrap();
        let item = tables.create::<InventoryItem>(new_item("i1", "p1", 100)).unwrap();

        assert!(vendor.created_at >= before);
        assert!(item.updated_at >= before);
        assert_eq!(tables.get::<Vendor>(&vendor.id).unwrap(), vendor);
    }

    #[test]
    fn list_returns_exactly_the_created_records() {
        let mut tables = Tables::new();
        for id in ["b1", "b2", "b3"] {
            tables.create::<Buyer>(new_buyer(id)).unwrap();
        }

        let ids: HashSet<String> = tables
            .list::<Buyer>()
            .into_iter()
            .map(|b| b.id.to_string())
            .collect();
        assert_eq!(ids, HashSet::from(["b1".to_string(), "b2".to_string(), "b3".to_string()]));
        assert!(tables.list::<Seller>().is_empty());
    }

    #[test]
    fn update_quantity_changes_only_quantity() {
        let mut tables = Tables::new();
        let created = tables.create::<InventoryItem>(new_item("i1", "p1", 100)).unwrap();

        tables.update_quantity(&created.id, -5).unwrap();

        let updated = tables.get::<InventoryItem>(&created.id).unwrap();
        assert_eq!(updated.quantity, -5);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.product_id, created.product_id);
        assert_eq!(updated.location, created.location);
    }

    #[test]
    fn update_quantity_of_unknown_item_creates_nothing() {
        let mut tables = Tables::new();
        let id = InventoryItemId::new("ghost").unwrap();

        let err = tables.update_quantity(&id, 5).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::InventoryItem, "ghost"));
        assert!(!tables.contains::<InventoryItem>(&id));
        assert_eq!(tables.len::<InventoryItem>(), 0);
    }

    #[test]
    fn repeated_updates_keep_timestamps_monotonic() {
        let mut tables = Tables::new();
        let item = tables.create::<InventoryItem>(new_item("i1", "p1", 0)).unwrap();

        let mut last = item.updated_at;
        for q in 1..=20 {
            tables.update_quantity(&item.id, q).unwrap();
            let now = tables.get::<InventoryItem>(&item.id).unwrap().updated_at;
            assert!(now >= last);
            last = now;
        }
        assert_eq!(tables.get::<InventoryItem>(&item.id).unwrap().quantity, 20);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: after creating N distinct vendors, list holds exactly those N.
            #[test]
            fn list_is_the_set_of_created_ids(
                ids in proptest::collection::hash_set("[a-z0-9-]{1,12}", 0..40)
            ) {
                let mut tables = Tables::new();
                for id in &ids {
                    tables.create::<Vendor>(new_vendor(id)).unwrap();
                }

                let listed: HashSet<String> = tables
                    .list::<Vendor>()
                    .into_iter()
                    .map(|v| v.id.to_string())
                    .collect();
                prop_assert_eq!(listed, ids.clone());
                prop_assert_eq!(tables.len::<Vendor>(), ids.len());
            }

            /// Property: re-creating any existing id is rejected and changes nothing.
            #[test]
            fn recreate_never_mutates(
                ids in proptest::collection::hash_set("[a-z0-9]{1,8}", 1..20),
                quantity in any::<i64>()
            ) {
                let mut tables = Tables::new();
                for id in &ids {
                    tables.create::<InventoryItem>(new_item(id, "p1", 1)).unwrap();
                }
                let before = tables.list::<InventoryItem>();

                for id in &ids {
                    let err = tables.create::<InventoryItem>(new_item(id, "p2", quantity)).unwrap_err();
                    prop_assert!(err.is_already_exists());
                }

                for rec in before {
                    prop_assert_eq!(tables.get::<InventoryItem>(&rec.id).unwrap(), rec);
                }
            }
        }
    }
}
