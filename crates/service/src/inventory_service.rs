use materials_core::{StoreError, StoreResult};
use materials_inventory::{InventoryItem, InventoryItemId, NewInventoryItem};
use materials_parties::{Buyer, BuyerId, NewBuyer, NewSeller, NewVendor, Seller, SellerId, Vendor, VendorId};
use materials_products::{NewProduct, Product, ProductId};
use materials_store::{Store, Stored, Tables};

/// Application-facing operations over the store.
///
/// Sellers, buyers and vendors, plus every `get`/`list`, pass straight through.
/// Creating a product requires its vendor to exist; creating an inventory item
/// requires its product to exist. A missing dependency is reported as `NotFound`
/// for the dependency's kind and nothing is written.
///
/// The dependency check and the insert run inside one `Store::write` section, so
/// no other caller can interleave between them.
#[derive(Debug, Clone)]
pub struct InventoryService<S> {
    store: S,
}

impl<S> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Fail with `NotFound` for `D` unless `id` is present.
fn require<D: Stored>(tables: &Tables, id: &D::Id) -> StoreResult<()> {
    if tables.contains::<D>(id) {
        Ok(())
    } else {
        Err(StoreError::not_found(D::KIND, id))
    }
}

impl<S: Store> InventoryService<S> {
    fn create<E: Stored>(&self, new: E::New) -> StoreResult<E> {
        let created = self.store.create::<E>(new);
        log_create(&created);
        created
    }

    // Sellers

    pub fn create_seller(&self, new: NewSeller) -> StoreResult<Seller> {
        self.create(new)
    }

    pub fn get_seller(&self, id: &SellerId) -> StoreResult<Seller> {
        self.store.get(id)
    }

    pub fn list_sellers(&self) -> Vec<Seller> {
        self.store.list()
    }

    // Buyers

    pub fn create_buyer(&self, new: NewBuyer) -> StoreResult<Buyer> {
        self.create(new)
    }

    pub fn get_buyer(&self, id: &BuyerId) -> StoreResult<Buyer> {
        self.store.get(id)
    }

    pub fn list_buyers(&self) -> Vec<Buyer> {
        self.store.list()
    }

    // Vendors

    pub fn create_vendor(&self, new: NewVendor) -> StoreResult<Vendor> {
        self.create(new)
    }

    pub fn get_vendor(&self, id: &VendorId) -> StoreResult<Vendor> {
        self.store.get(id)
    }

    pub fn list_vendors(&self) -> Vec<Vendor> {
        self.store.list()
    }

    // Products

    /// Create a product whose `vendor_id` names an existing vendor.
    pub fn create_product(&self, new: NewProduct) -> StoreResult<Product> {
        let created = self.store.write(|tables| {
            require::<Vendor>(tables, &new.vendor_id)?;
            tables.create::<Product>(new)
        });
        log_create(&created);
        created
    }

    pub fn get_product(&self, id: &ProductId) -> StoreResult<Product> {
        self.store.get(id)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list()
    }

    // Inventory

    /// Create an inventory item whose `product_id` names an existing product.
    pub fn create_inventory_item(&self, new: NewInventoryItem) -> StoreResult<InventoryItem> {
        let created = self.store.write(|tables| {
            require::<Product>(tables, &new.product_id)?;
            tables.create::<InventoryItem>(new)
        });
        log_create(&created);
        created
    }

    pub fn get_inventory_item(&self, id: &InventoryItemId) -> StoreResult<InventoryItem> {
        self.store.get(id)
    }

    pub fn list_inventory_items(&self) -> Vec<InventoryItem> {
        self.store.list()
    }

    pub fn update_inventory_quantity(&self, id: &InventoryItemId, quantity: i64) -> StoreResult<()> {
        let res = self.store.update_quantity(id, quantity);
        if let Err(e) = &res {
            tracing::warn!("quantity update rejected: {e}");
        }
        res
    }
}

fn log_create<E: Stored>(res: &StoreResult<E>) {
    let kind = E::KIND;
    match res {
        Ok(rec) => tracing::info!(%kind, id = %rec.id(), "created"),
        Err(e) => tracing::warn!(%kind, "create rejected: {e}"),
    }
}
