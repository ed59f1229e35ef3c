use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, Utc};

use materials_core::{Entity, StoreError, StoreResult};

/// Keyed container for one entity kind.
///
/// Iteration order is whatever the underlying `HashMap` yields; callers must not
/// rely on it.
#[derive(Debug)]
pub struct Table<E: Entity> {
    rows: HashMap<E::Id, E>,
}

impl<E: Entity> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<E: Entity> Table<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp and insert a new record, returning a copy of what was stored.
    ///
    /// Fails with `AlreadyExists` if the id is taken; the existing row is untouched.
    pub fn insert(&mut self, new: E::New, now: DateTime<Utc>) -> StoreResult<E> {
        match self.rows.entry(E::new_id(&new).clone()) {
            Entry::Occupied(slot) => Err(StoreError::already_exists(E::KIND, slot.key())),
            Entry::Vacant(slot) => Ok(slot.insert(E::stamp(new, now)).clone()),
        }
    }

    pub fn get(&self, id: &E::Id) -> StoreResult<E> {
        self.rows
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(E::KIND, id))
    }

    pub fn get_mut(&mut self, id: &E::Id) -> StoreResult<&mut E> {
        self.rows
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(E::KIND, id))
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.rows.contains_key(id)
    }

    /// Independent snapshot of every row (order unspecified).
    pub fn list(&self) -> Vec<E> {
        self.rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
