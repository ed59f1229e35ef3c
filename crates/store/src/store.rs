use std::sync::Arc;

use materials_core::StoreResult;
use materials_inventory::InventoryItemId;

use crate::tables::{Stored, Tables};

/// Concurrency-safe holder of all entity state.
///
/// `read` and `write` run a closure inside one critical section. Reads may overlap;
/// a write excludes every other read and write for its whole duration, so anything
/// done inside one `write` call is atomic with respect to all other callers.
///
/// The provided methods are single-operation shortcuts that take the lock once.
pub trait Store: Send + Sync {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R;

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R;

    fn create<E: Stored>(&self, new: E::New) -> StoreResult<E> {
        self.write(|tables| tables.create::<E>(new))
    }

    fn get<E: Stored>(&self, id: &E::Id) -> StoreResult<E> {
        self.read(|tables| tables.get::<E>(id))
    }

    fn contains<E: Stored>(&self, id: &E::Id) -> bool {
        self.read(|tables| tables.contains::<E>(id))
    }

    fn list<E: Stored>(&self) -> Vec<E> {
        self.read(|tables| tables.list::<E>())
    }

    fn update_quantity(&self, id: &InventoryItemId, quantity: i64) -> StoreResult<()> {
        self.write(|tables| tables.update_quantity(id, quantity))
    }
}

impl<S: Store> Store for Arc<S> {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        (**self).write(f)
    }
}
