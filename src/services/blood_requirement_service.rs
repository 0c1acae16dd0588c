use crate::error::ApiError;
use crate::models::{BloodRequirement, BloodRequirementInput, RequirementStatus, StatusChange};
use crate::services::ApiClient;

/// `/blood-requirements` endpoints
impl ApiClient {
    pub async fn get_blood_requirements(&self) -> Result<Vec<BloodRequirement>, ApiError> {
        self.get("/blood-requirements").await
    }

    pub async fn create_blood_requirement(
        &self,
        input: &BloodRequirementInput,
    ) -> Result<BloodRequirement, ApiError> {
        self.post("/blood-requirements", input).await
    }

    /// Any status may be written; the service decides what is legal
    pub async fn update_blood_requirement_status(
        &self,
        id: &str,
        status: RequirementStatus,
    ) -> Result<BloodRequirement, ApiError> {
        self.put(&format!("/blood-requirements/{}/status", id), &StatusChange { status }).await
    }

    pub async fn delete_blood_requirement(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/blood-requirements/{}", id)).await
    }
}
