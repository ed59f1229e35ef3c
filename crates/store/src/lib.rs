//! Storage engine: the single owner of all entity state.
//!
//! - `table`: keyed container for one entity kind (uniqueness + stamping)
//! - `tables`: the five tables as one unit, with typed operations
//! - `store`: the `Store` trait (read/write critical sections + one-shot operations)
//! - `in_memory`: `InMemoryStore`, the process-lifetime implementation
//!
//! All five tables sit behind one reader/writer lock. Reads share it; any write
//! excludes every other read and write, whatever the entity kind.

pub mod in_memory;
pub mod store;
pub mod table;
pub mod tables;

pub use in_memory::InMemoryStore;
pub use store::Store;
pub use table::Table;
pub use tables::{Stored, Tables};
