use serde::{Deserialize, Serialize};

use super::{InsertPosition, Reference, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// `null` once the referenced activity or volunteer has been deleted
    #[serde(default)]
    pub activity_id: Option<Reference>,
    #[serde(default)]
    pub user_id: Option<Reference>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// (activity, subject) pair the view layer treats as unique
    pub fn key(&self) -> (Option<&str>, Option<&str>) {
        (
            self.activity_id.as_ref().map(Reference::id),
            self.user_id.as_ref().map(Reference::id),
        )
    }

    /// Same (activity, subject) pair. Records with a dangling reference
    /// never match anything.
    pub fn same_entry(&self, other: &AttendanceRecord) -> bool {
        match (self.key(), other.key()) {
            ((Some(activity), Some(user)), (Some(other_activity), Some(other_user))) => {
                activity == other_activity && user == other_user
            }
            _ => false,
        }
    }
}

impl Resource for AttendanceRecord {
    const KIND: &'static str = "attendance";
    const CREATE_POSITION: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub user_id: String,
    pub activity_id: String,
    pub status: AttendanceStatus,
}

/// Body of `POST /attendance`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    pub activity_id: String,
    pub records: Vec<AttendanceEntry>,
}

impl AttendanceSubmission {
    /// One entry per subject, `present` for those in `present_ids`
    pub fn for_activity<'a>(
        activity_id: &str,
        subject_ids: impl IntoIterator<Item = &'a str>,
        present_ids: &[&str],
    ) -> Self {
        let records = subject_ids
            .into_iter()
            .map(|user_id| AttendanceEntry {
                user_id: user_id.to_string(),
                activity_id: activity_id.to_string(),
                status: if present_ids.contains(&user_id) {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                },
            })
            .collect();
        Self { activity_id: activity_id.to_string(), records }
    }
}

/// The service answers a mark call with either the saved list or one record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarkedAttendance {
    Many(Vec<AttendanceRecord>),
    One(AttendanceRecord),
}

impl MarkedAttendance {
    pub fn into_records(self) -> Vec<AttendanceRecord> {
        match self {
            MarkedAttendance::Many(records) => records,
            MarkedAttendance::One(record) => vec![record],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_marks_only_listed_subjects_present() {
        let submission = AttendanceSubmission::for_activity("a1", ["u1", "u2", "u3"], &["u2"]);
        let statuses: Vec<_> = submission.records.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            [AttendanceStatus::Absent, AttendanceStatus::Present, AttendanceStatus::Absent]
        );

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["activityId"], "a1");
        assert_eq!(json["records"][1]["userId"], "u2");
    }

    #[test]
    fn mark_response_accepts_list_or_single() {
        let single = r#"{"activityId":"a1","userId":{"_id":"u1","name":"Anu"},"status":"present"}"#;
        let marked: MarkedAttendance = serde_json::from_str(single).unwrap();
        let records = marked.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key(), (Some("a1"), Some("u1")));

        let many = format!("[{single},{single}]");
        let marked: MarkedAttendance = serde_json::from_str(&many).unwrap();
        assert_eq!(marked.into_records().len(), 2);
    }

    #[test]
    fn dangling_references_decode_and_never_match() {
        let body = r#"[
            {"_id":"r1","activityId":"a1","userId":{"_id":"u1","name":"Anu"},"status":"present"},
            {"_id":"r2","activityId":"a1","userId":null,"status":"absent"},
            {"_id":"r3","status":"absent"}
        ]"#;
        let records: Vec<AttendanceRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records[1].key(), (Some("a1"), None));
        assert_eq!(records[2].key(), (None, None));
        assert!(!records[1].same_entry(&records[1]));
        assert!(records[0].same_entry(&records[0]));
        assert!(!records[0].same_entry(&records[1]));
    }
}
