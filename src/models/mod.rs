pub mod session;
pub mod activity;
pub mod blood_requirement;
pub mod attendance;
pub mod volunteer;

pub use session::{Credentials, LoginResponse, Registration, Role, Session, UserProfile};
pub use activity::{Activity, ActivityInput, ActivityStatus, ActivityType};
pub use blood_requirement::{
    BloodGroup, BloodRequirement, BloodRequirementInput, RequirementStatus, Urgency,
};
pub use attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, AttendanceSubmission, MarkedAttendance,
};
pub use volunteer::{Volunteer, VolunteerInput};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Where a freshly created record lands in its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// A record mirrored by a resource store
pub trait Resource: Clone + std::fmt::Debug + DeserializeOwned + 'static {
    /// Display name used in logs ("activities", "volunteers", ...)
    const KIND: &'static str;
    /// Placement of records returned by a create call
    const CREATE_POSITION: InsertPosition;

    fn id(&self) -> &str;
}

/// Body of the status endpoints: `{ "status": ... }`
#[derive(Debug, Serialize)]
pub(crate) struct StatusChange<S> {
    pub status: S,
}

/// Id of a user document, which arrives as `_id`, `id` or both
pub(crate) fn document_id(mongo_id: Option<String>, id: Option<String>) -> Result<String, String> {
    mongo_id.or(id).ok_or_else(|| "missing field `_id`".to_string())
}

/// A foreign key the service sends either as a bare id or populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Populated(ReferencedEntity),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencedEntity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Populated(entity) => &entity.id,
        }
    }

    /// Human label when the service populated the reference
    pub fn label(&self) -> Option<&str> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(entity) => entity.name.as_deref().or(entity.title.as_deref()),
        }
    }
}

impl From<&str> for Reference {
    fn from(id: &str) -> Self {
        Reference::Id(id.to_string())
    }
}
