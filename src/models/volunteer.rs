use serde::{Deserialize, Serialize};

use super::{document_id, InsertPosition, Resource, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VolunteerDocument")]
pub struct Volunteer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Deserialize)]
struct VolunteerDocument {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    name: String,
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    role: Option<Role>,
}

impl TryFrom<VolunteerDocument> for Volunteer {
    type Error = String;

    fn try_from(doc: VolunteerDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document_id(doc.mongo_id, doc.id)?,
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            role: doc.role,
        })
    }
}

impl Resource for Volunteer {
    const KIND: &'static str = "volunteers";
    const CREATE_POSITION: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Volunteer form payload. The password is write-only: an empty one is left
/// out of update requests so the stored credential is kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VolunteerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl VolunteerInput {
    pub(crate) fn without_blank_password(mut self) -> Self {
        if self.password.as_deref().map_or(false, str::is_empty) {
            self.password = None;
        }
        self
    }
}

/// `POST /users/register` always registers volunteers from this screen
#[derive(Debug, Serialize)]
pub(crate) struct VolunteerRegistration {
    #[serde(flatten)]
    pub input: VolunteerInput,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_forces_volunteer_role() {
        let body = VolunteerRegistration {
            input: VolunteerInput {
                name: "Meena".into(),
                email: "meena@tce.edu".into(),
                phone: "99999".into(),
                password: Some("pw".into()),
            },
            role: Role::Volunteer,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["role"], "volunteer");
        assert_eq!(json["password"], "pw");
    }

    #[test]
    fn blank_password_is_not_sent() {
        let input = VolunteerInput { password: Some(String::new()), ..VolunteerInput::default() };
        let json = serde_json::to_value(input.without_blank_password()).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn decoded_volunteer_has_no_password() {
        let body = r#"{"_id":"v1","name":"Meena","email":"m@tce.edu","password":"hash"}"#;
        let volunteer: Volunteer = serde_json::from_str(body).unwrap();
        assert_eq!(volunteer.id, "v1");
        assert!(serde_json::to_value(&volunteer).unwrap().get("password").is_none());
    }

    #[test]
    fn volunteer_with_both_id_keys_decodes() {
        let body = r#"{"_id":"v1","id":"v1","name":"Meena","email":"m@tce.edu"}"#;
        let volunteer: Volunteer = serde_json::from_str(body).unwrap();
        assert_eq!(volunteer.id, "v1");
        assert_eq!(volunteer.phone, "");
    }
}
