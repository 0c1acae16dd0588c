// ============================================================================
// VOLUNTEERS VIEWMODEL
// ============================================================================

use crate::models::VolunteerInput;
use crate::services::ApiClient;
use crate::state::VolunteersState;
use crate::viewmodels::dispatcher::{dispatch, Action};

const FETCH_ALL: Action = Action::replacing("volunteers/fetchVolunteers", "Failed to fetch volunteers");
const CREATE: Action = Action::new("volunteers/createVolunteer", "Failed to create volunteer");
const UPDATE: Action = Action::new("volunteers/updateVolunteer", "Failed to update volunteer");
const DELETE: Action = Action::new("volunteers/deleteVolunteer", "Failed to delete volunteer");

#[derive(Clone)]
pub struct VolunteersViewModel {
    api: ApiClient,
    state: VolunteersState,
}

impl VolunteersViewModel {
    pub fn new(api: ApiClient, state: VolunteersState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &VolunteersState {
        &self.state
    }

    pub async fn fetch_volunteers(&self) -> Result<(), String> {
        dispatch(&self.state, FETCH_ALL, self.api.get_volunteers(), |store, volunteers| {
            store.replace_all(volunteers)
        })
        .await
        .map(drop)
    }

    /// Registers the account with the volunteer role and appends it
    pub async fn create_volunteer(&self, input: VolunteerInput) -> Result<(), String> {
        dispatch(&self.state, CREATE, self.api.create_volunteer(input), |store, volunteer| {
            log::info!("🙋 Volunteer {} registered", volunteer.email);
            store.insert_created(volunteer)
        })
        .await
        .map(drop)
    }

    pub async fn update_volunteer(&self, id: &str, input: VolunteerInput) -> Result<(), String> {
        dispatch(&self.state, UPDATE, self.api.update_volunteer(id, input), |store, volunteer| {
            store.replace_by_id(volunteer)
        })
        .await
        .map(drop)
    }

    pub async fn delete_volunteer(&self, id: &str) -> Result<(), String> {
        dispatch(&self.state, DELETE, self.api.delete_volunteer(id), |store, ()| store.remove_by_id(id))
            .await
            .map(drop)
    }
}
