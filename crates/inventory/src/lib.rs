//! Inventory: stock levels of products at locations.
//!
//! Quantity is the only field in the whole model that may change after creation.

pub mod item;

pub use item::{InventoryItem, InventoryItemId, NewInventoryItem, QuantityUpdate};
