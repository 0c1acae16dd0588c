// ============================================================================
// BLOOD REQUIREMENTS VIEWMODEL
// ============================================================================

use crate::models::{BloodRequirementInput, RequirementStatus};
use crate::services::ApiClient;
use crate::state::BloodRequirementsState;
use crate::viewmodels::dispatcher::{dispatch, Action};

const FETCH_ALL: Action =
    Action::replacing("bloodRequirements/fetchRequirements", "Failed to fetch requirements");
const CREATE: Action =
    Action::new("bloodRequirements/createRequirement", "Failed to create requirement");
const UPDATE_STATUS: Action = Action::new("bloodRequirements/updateStatus", "Failed to update status");
const DELETE: Action =
    Action::new("bloodRequirements/deleteRequirement", "Failed to delete requirement");

#[derive(Clone)]
pub struct BloodRequirementsViewModel {
    api: ApiClient,
    state: BloodRequirementsState,
}

impl BloodRequirementsViewModel {
    pub fn new(api: ApiClient, state: BloodRequirementsState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &BloodRequirementsState {
        &self.state
    }

    pub async fn fetch_requirements(&self) -> Result<(), String> {
        dispatch(&self.state, FETCH_ALL, self.api.get_blood_requirements(), |store, requirements| {
            store.replace_all(requirements)
        })
        .await
        .map(drop)
    }

    pub async fn create_requirement(&self, input: &BloodRequirementInput) -> Result<(), String> {
        dispatch(&self.state, CREATE, self.api.create_blood_requirement(input), |store, requirement| {
            log::info!("🩸 Requirement {} posted", requirement.id);
            store.insert_created(requirement)
        })
        .await
        .map(drop)
    }

    /// Any status can be sent, including moving a fulfilled one back
    pub async fn update_status(&self, id: &str, status: RequirementStatus) -> Result<(), String> {
        dispatch(
            &self.state,
            UPDATE_STATUS,
            self.api.update_blood_requirement_status(id, status),
            |store, requirement| store.replace_by_id(requirement),
        )
        .await
        .map(drop)
    }

    pub async fn delete_requirement(&self, id: &str) -> Result<(), String> {
        dispatch(&self.state, DELETE, self.api.delete_blood_requirement(id), |store, ()| {
            store.remove_by_id(id)
        })
        .await
        .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodGroup, Role, Urgency};
    use crate::navigation::Route;
    use crate::services::Method;
    use crate::test_support::{blood_requirement, json, Harness, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    fn input() -> BloodRequirementInput {
        BloodRequirementInput {
            recipient_name: "Kavya".into(),
            blood_group: BloodGroup::AbNegative,
            units_needed: 3,
            hospital_name: "Meenakshi Mission".into(),
            contact_number: "9000000002".into(),
            urgency: Urgency::Urgent,
            details: None,
        }
    }

    #[test]
    fn new_requirement_is_listed_first() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Admin);
        transport
            .respond(200, json!([json(&blood_requirement("b1")), json(&blood_requirement("b2"))]))
            .respond(201, json(&blood_requirement("b3")));

        block_on(h.app.blood_requirements.fetch_requirements()).unwrap();
        block_on(h.app.blood_requirements.create_requirement(&input())).unwrap();

        let ids: Vec<_> = h.app.state.blood_requirements.items().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["b3", "b1", "b2"]);
        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["bloodGroup"], "AB-");
        assert_eq!(body["urgency"], "urgent");
    }

    #[test]
    fn status_can_move_back_to_active() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Admin);
        let mut fulfilled = blood_requirement("b1");
        fulfilled.status = RequirementStatus::Fulfilled;
        h.app.state.blood_requirements.update(|s| s.replace_all(vec![fulfilled]));

        transport.respond(200, json(&blood_requirement("b1")));
        block_on(h.app.blood_requirements.update_status("b1", RequirementStatus::Active)).unwrap();

        assert_eq!(
            h.app.state.blood_requirements.find("b1").map(|r| r.status),
            Some(RequirementStatus::Active)
        );
        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/api/blood-requirements/b1/status");
    }

    #[test]
    fn failed_delete_keeps_record_and_uses_fallback() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Admin);
        h.app.state.blood_requirements.update(|s| s.replace_all(vec![blood_requirement("b1")]));
        transport.respond(500, serde_json::Value::Null);

        let result = block_on(h.app.blood_requirements.delete_requirement("b1"));

        assert_eq!(result, Err("Failed to delete requirement".to_string()));
        assert_eq!(h.app.state.blood_requirements.items().len(), 1);
        assert!(!h.app.state.blood_requirements.loading());
    }

    #[test]
    fn unauthorized_fetch_ends_session() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Volunteer);
        transport.respond(401, json!({}));

        let result = block_on(h.app.blood_requirements.fetch_requirements());

        assert_eq!(result, Err("Failed to fetch requirements".to_string()));
        assert!(!h.app.state.session().is_authenticated());
        assert_eq!(h.navigator.redirects(), vec![Route::Login]);
    }
}
