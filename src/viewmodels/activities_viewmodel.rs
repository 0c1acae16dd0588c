// ============================================================================
// ACTIVITIES VIEWMODEL
// ============================================================================

use crate::models::{Activity, ActivityInput, ActivityStatus};
use crate::services::ApiClient;
use crate::state::ActivitiesState;
use crate::viewmodels::dispatcher::{dispatch, Action};

const FETCH_ALL: Action = Action::replacing("activities/fetchActivities", "Failed to fetch activities");
const FETCH_ONE: Action = Action::new("activities/fetchActivity", "Failed to fetch activity");
const CREATE: Action = Action::new("activities/createActivity", "Failed to create activity");
const UPDATE: Action = Action::new("activities/updateActivity", "Failed to update activity");
const DELETE: Action = Action::new("activities/deleteActivity", "Failed to delete activity");
const UPDATE_STATUS: Action =
    Action::new("activities/updateStatus", "Failed to update activity status");

#[derive(Clone)]
pub struct ActivitiesViewModel {
    api: ApiClient,
    state: ActivitiesState,
}

impl ActivitiesViewModel {
    pub fn new(api: ApiClient, state: ActivitiesState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &ActivitiesState {
        &self.state
    }

    pub async fn fetch_activities(&self) -> Result<(), String> {
        dispatch(&self.state.store, FETCH_ALL, self.api.get_activities(), |store, activities| {
            log::info!("📋 {} activities loaded", activities.len());
            store.replace_all(activities)
        })
        .await
        .map(drop)
    }

    /// Load one activity and make it the selected one
    pub async fn fetch_activity(&self, id: &str) -> Result<(), String> {
        let fetched =
            dispatch(&self.state.store, FETCH_ONE, self.api.get_activity(id), |_, activity| activity)
                .await?;
        if let Some(activity) = fetched {
            self.state.select(activity);
        }
        Ok(())
    }

    pub async fn create_activity(&self, input: &ActivityInput) -> Result<(), String> {
        dispatch(&self.state.store, CREATE, self.api.create_activity(input), |store, activity| {
            store.insert_created(activity)
        })
        .await
        .map(drop)
    }

    pub async fn update_activity(&self, id: &str, input: &ActivityInput) -> Result<(), String> {
        dispatch(&self.state.store, UPDATE, self.api.update_activity(id, input), |store, activity| {
            store.replace_by_id(activity)
        })
        .await
        .map(drop)
    }

    pub async fn delete_activity(&self, id: &str) -> Result<(), String> {
        dispatch(&self.state.store, DELETE, self.api.delete_activity(id), |store, ()| {
            store.remove_by_id(id)
        })
        .await
        .map(drop)
    }

    pub async fn update_activity_status(&self, id: &str, status: ActivityStatus) -> Result<(), String> {
        dispatch(
            &self.state.store,
            UPDATE_STATUS,
            self.api.update_activity_status(id, status),
            |store, activity| store.replace_by_id(activity),
        )
        .await
        .map(drop)
    }

    pub fn select(&self, activity: Activity) {
        self.state.select(activity);
    }

    pub fn clear_selected(&self) {
        self.state.clear_selected();
    }
}
