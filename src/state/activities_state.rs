use crate::config::StaleResponsePolicy;
use crate::models::Activity;
use crate::state::{resource_state, ReactiveState, ResourceState};

/// Activity collection plus the activity a screen is focused on
#[derive(Clone)]
pub struct ActivitiesState {
    pub store: ResourceState<Activity>,
    pub selected: ReactiveState<Option<Activity>>,
}

impl ActivitiesState {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self {
            store: resource_state(policy),
            selected: ReactiveState::new(None),
        }
    }

    pub fn select(&self, activity: Activity) {
        self.selected.set(Some(activity));
    }

    pub fn clear_selected(&self) {
        self.selected.set(None);
    }

    pub fn selected(&self) -> Option<Activity> {
        self.selected.get()
    }
}

impl Default for ActivitiesState {
    fn default() -> Self {
        Self::new(StaleResponsePolicy::default())
    }
}
