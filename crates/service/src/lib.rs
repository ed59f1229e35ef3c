//! Integrity service: cross-entity existence checks on top of the store.
//!
//! ```text
//! caller
//!   ↓
//! InventoryService  (dependency check: product → vendor, inventory item → product)
//!   ↓
//! Store             (uniqueness, stamping, the only mutator)
//! ```

pub mod inventory_service;

pub use inventory_service::InventoryService;
