// ============================================================================
// RESOURCE STORE - mirror of one remote collection
// ============================================================================
// The collection is exactly what the service last sent (plus the create /
// update / delete results applied on top). No sorting or filtering here.
// ============================================================================

use crate::config::StaleResponsePolicy;
use crate::models::{InsertPosition, Resource};
use crate::stores::{LoadState, Lifecycle};

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T> {
    items: Vec<T>,
    load: LoadState,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self { items: Vec::new(), load: LoadState::new(policy) }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// fetch-all: response order is kept as is
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// create: front or back depending on the resource
    pub fn insert_created(&mut self, item: T) {
        match T::CREATE_POSITION {
            InsertPosition::Front => self.items.insert(0, item),
            InsertPosition::Back => self.items.push(item),
        }
    }

    /// update / status change. Unknown ids leave the collection untouched.
    pub fn replace_by_id(&mut self, item: T) -> bool {
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => {
                log::warn!("⚠️ {} {} is not in the store, update ignored", T::KIND, item.id());
                false
            }
        }
    }

    /// delete. Unknown ids leave the collection untouched.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if !removed {
            log::warn!("⚠️ {} {} is not in the store, delete ignored", T::KIND, id);
        }
        removed
    }

    /// Replace the first item matching `same`, append when none does
    pub fn upsert_by(&mut self, item: T, same: impl Fn(&T, &T) -> bool) {
        match self.items.iter().position(|existing| same(existing, &item)) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new(StaleResponsePolicy::default())
    }
}

impl<T> Lifecycle for ResourceStore<T> {
    fn load_state(&self) -> &LoadState {
        &self.load
    }

    fn load_state_mut(&mut self) -> &mut LoadState {
        &mut self.load
    }
}
