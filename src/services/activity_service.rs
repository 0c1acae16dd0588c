use crate::error::ApiError;
use crate::models::{Activity, ActivityInput, ActivityStatus, StatusChange};
use crate::services::ApiClient;

/// `/activities` endpoints
impl ApiClient {
    pub async fn get_activities(&self) -> Result<Vec<Activity>, ApiError> {
        self.get("/activities").await
    }

    pub async fn get_activity(&self, id: &str) -> Result<Activity, ApiError> {
        self.get(&format!("/activities/{}", id)).await
    }

    pub async fn create_activity(&self, input: &ActivityInput) -> Result<Activity, ApiError> {
        self.post("/activities", input).await
    }

    pub async fn update_activity(&self, id: &str, input: &ActivityInput) -> Result<Activity, ApiError> {
        self.put(&format!("/activities/{}", id), input).await
    }

    pub async fn delete_activity(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/activities/{}", id)).await
    }

    pub async fn update_activity_status(
        &self,
        id: &str,
        status: ActivityStatus,
    ) -> Result<Activity, ApiError> {
        self.patch(&format!("/activities/{}/status", id), &StatusChange { status }).await
    }
}
