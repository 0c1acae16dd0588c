use crate::error::ApiError;
use crate::models::volunteer::VolunteerRegistration;
use crate::models::{Role, Volunteer, VolunteerInput};
use crate::services::api_client::unwrap_user_envelope;
use crate::services::ApiClient;

/// `/users` endpoints used by the volunteer screens
impl ApiClient {
    pub async fn get_volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        self.get("/users/volunteers").await
    }

    /// The service may wrap the created account as `{ message, user }`
    pub async fn create_volunteer(&self, input: VolunteerInput) -> Result<Volunteer, ApiError> {
        let registration = VolunteerRegistration { input, role: Role::Volunteer };
        let body: serde_json::Value = self.post("/users/register", &registration).await?;
        serde_json::from_value(unwrap_user_envelope(body)).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn update_volunteer(&self, id: &str, input: VolunteerInput) -> Result<Volunteer, ApiError> {
        self.put(&format!("/users/{}", id), &input.without_blank_password()).await
    }

    pub async fn delete_volunteer(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await
    }
}
