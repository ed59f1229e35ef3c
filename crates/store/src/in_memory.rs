use std::sync::{PoisonError, RwLock};

use crate::store::Store;
use crate::tables::Tables;

/// In-memory store guarded by one coarse reader/writer lock.
///
/// State lives for the lifetime of the process. A poisoned lock is recovered:
/// every mutation is a single map insert or field write, so a panicking holder
/// cannot leave a half-applied change behind.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        f(&tables)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut tables)
    }
}
