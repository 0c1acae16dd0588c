// ============================================================================
// ATTENDANCE VIEWMODEL
// ============================================================================
// All three fetches replace the same collection: a screen shows either the
// full list, one activity's roll or one volunteer's history.
// ============================================================================

use crate::models::{AttendanceRecord, AttendanceSubmission};
use crate::services::ApiClient;
use crate::state::AttendanceState;
use crate::viewmodels::dispatcher::{dispatch, Action};

const FETCH_ALL: Action = Action::replacing("attendance/fetchAttendance", "Failed to fetch attendance");
const MARK: Action = Action::new("attendance/markAttendance", "Failed to mark attendance");
const FETCH_FOR_ACTIVITY: Action = Action::replacing(
    "attendance/fetchActivityAttendance",
    "Failed to fetch activity attendance",
);
const FETCH_FOR_USER: Action =
    Action::replacing("attendance/fetchUserAttendance", "Failed to fetch attendance records");

#[derive(Clone)]
pub struct AttendanceViewModel {
    api: ApiClient,
    state: AttendanceState,
}

impl AttendanceViewModel {
    pub fn new(api: ApiClient, state: AttendanceState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &AttendanceState {
        &self.state
    }

    pub async fn fetch_attendance(&self) -> Result<(), String> {
        dispatch(&self.state, FETCH_ALL, self.api.get_attendance(), |store, records| {
            store.replace_all(records)
        })
        .await
        .map(drop)
    }

    /// Saved records replace the ones for the same (activity, volunteer)
    pub async fn mark_attendance(&self, submission: &AttendanceSubmission) -> Result<(), String> {
        dispatch(&self.state, MARK, self.api.mark_attendance(submission), |store, records| {
            log::info!("✅ {} attendance records saved for {}", records.len(), submission.activity_id);
            for record in records {
                store.upsert_by(record, AttendanceRecord::same_entry);
            }
        })
        .await
        .map(drop)
    }

    pub async fn fetch_activity_attendance(&self, activity_id: &str) -> Result<(), String> {
        dispatch(
            &self.state,
            FETCH_FOR_ACTIVITY,
            self.api.get_activity_attendance(activity_id),
            |store, records| store.replace_all(records),
        )
        .await
        .map(drop)
    }

    pub async fn fetch_user_attendance(&self, user_id: &str) -> Result<(), String> {
        dispatch(&self.state, FETCH_FOR_USER, self.api.get_user_attendance(user_id), |store, records| {
            store.replace_all(records)
        })
        .await
        .map(drop)
    }
}
