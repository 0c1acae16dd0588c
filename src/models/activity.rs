use serde::{Deserialize, Serialize};

use super::{InsertPosition, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Classroom,
    Special,
    Camp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Kept as sent by the service (ISO date or `YYYY-MM-DD`)
    pub date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub status: ActivityStatus,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Resource for Activity {
    const KIND: &'static str = "activities";
    const CREATE_POSITION: InsertPosition = InsertPosition::Front;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update payload of the activity form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub status: ActivityStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Default for ActivityInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            venue: String::new(),
            kind: ActivityType::Classroom,
            status: ActivityStatus::Upcoming,
            images: Vec::new(),
        }
    }
}
