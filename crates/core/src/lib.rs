//! `materials-core`: shared building blocks for the materials inventory.
//!
//! Typed identifiers, the [`Entity`] trait every stored record implements, and the
//! error model used across the store, the integrity service and the HTTP adapter.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, EntityKind};
pub use error::{DomainError, DomainResult, StoreError, StoreResult};
