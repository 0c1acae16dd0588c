// ============================================================================
// RESOURCE STATE - reactive stores shared between view models and views
// ============================================================================

use crate::config::StaleResponsePolicy;
use crate::models::{AttendanceRecord, BloodRequirement, Resource, Volunteer};
use crate::state::ReactiveState;
use crate::stores::{Lifecycle, ResourceStore};

pub type ResourceState<T> = ReactiveState<ResourceStore<T>>;
pub type BloodRequirementsState = ResourceState<BloodRequirement>;
pub type AttendanceState = ResourceState<AttendanceRecord>;
pub type VolunteersState = ResourceState<Volunteer>;

pub fn resource_state<T: Resource>(policy: StaleResponsePolicy) -> ResourceState<T> {
    ReactiveState::new(ResourceStore::new(policy))
}

impl<S: Lifecycle> ReactiveState<S> {
    pub fn loading(&self) -> bool {
        self.with(|store| store.loading())
    }

    pub fn error(&self) -> Option<String> {
        self.with(|store| store.error().map(str::to_string))
    }
}

impl<T: Resource> ReactiveState<ResourceStore<T>> {
    pub fn items(&self) -> Vec<T> {
        self.with(|store| store.items().to_vec())
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.with(|store| store.find(id).cloned())
    }
}
