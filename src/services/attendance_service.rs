use crate::error::ApiError;
use crate::models::{AttendanceRecord, AttendanceSubmission, MarkedAttendance};
use crate::services::ApiClient;

/// `/attendance` endpoints
impl ApiClient {
    pub async fn get_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get("/attendance").await
    }

    pub async fn mark_attendance(
        &self,
        submission: &AttendanceSubmission,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let marked: MarkedAttendance = self.post("/attendance", submission).await?;
        Ok(marked.into_records())
    }

    pub async fn get_activity_attendance(
        &self,
        activity_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get(&format!("/attendance/activity/{}", activity_id)).await
    }

    pub async fn get_user_attendance(&self, user_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get(&format!("/attendance/user/{}", user_id)).await
    }
}
