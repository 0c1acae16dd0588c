// Fixtures and scripted collaborators shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::app::App;
use crate::config::{AppConfig, StaleResponsePolicy};
use crate::models::{
    Activity, ActivityStatus, ActivityType, AttendanceRecord, AttendanceStatus, BloodGroup,
    BloodRequirement, RequirementStatus, Role, Session, Urgency, UserProfile, Volunteer,
};
use crate::navigation::{Navigator, Route};
use crate::services::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::MemoryStorage;

pub const BASE_URL: &str = "http://api.test/api";

pub fn activity(id: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: format!("Activity {id}"),
        description: String::new(),
        date: "2024-01-15".to_string(),
        venue: "TCE campus".to_string(),
        kind: ActivityType::Classroom,
        status: ActivityStatus::Upcoming,
        images: Vec::new(),
    }
}

pub fn blood_requirement(id: &str) -> BloodRequirement {
    BloodRequirement {
        id: id.to_string(),
        recipient_name: format!("Recipient {id}"),
        blood_group: BloodGroup::OPositive,
        units_needed: 2,
        hospital_name: "GH Madurai".to_string(),
        contact_number: "9000000000".to_string(),
        urgency: Urgency::Urgent,
        status: RequirementStatus::Active,
        posted_by: None,
        details: None,
    }
}

pub fn attendance(activity_id: &str, user_id: &str, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        id: format!("{activity_id}-{user_id}"),
        activity_id: Some(activity_id.into()),
        user_id: Some(user_id.into()),
        status,
    }
}

pub fn volunteer(id: &str) -> Volunteer {
    Volunteer {
        id: id.to_string(),
        name: format!("Volunteer {id}"),
        email: format!("{id}@tce.edu"),
        phone: "9000000001".to_string(),
        role: Some(Role::Volunteer),
    }
}

pub fn session_with_role(id: &str, role: Role) -> Session {
    let user = UserProfile {
        id: id.to_string(),
        name: format!("User {id}"),
        email: None,
        phone: None,
        role,
    };
    Session::new(user, format!("token-{id}"))
}

pub fn json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("fixture serializes")
}

/// Answers requests in order from a script and records what was sent
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.script.borrow_mut().push_back(Ok(HttpResponse { status, body }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.script.borrow_mut().push_back(Err(reason.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("a request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}

/// Holds every request open until the test releases it
#[derive(Default)]
pub struct GatedTransport {
    pending: RefCell<Vec<Option<oneshot::Sender<HttpResponse>>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl GatedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn in_flight(&self) -> usize {
        self.pending.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    /// Complete the `index`-th request (in issue order)
    pub fn release(&self, index: usize, status: u16, body: Value) {
        let sender = self.pending.borrow_mut()[index].take().expect("request still pending");
        let _ = sender.send(HttpResponse { status, body: body.to_string() });
    }
}

#[async_trait(?Send)]
impl HttpTransport for GatedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let (sender, receiver) = oneshot::channel();
        self.requests.borrow_mut().push(request);
        self.pending.borrow_mut().push(Some(sender));
        receiver.await.map_err(|_| "request dropped".to_string())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn redirects(&self) -> Vec<Route> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: Route) {
        self.redirects.borrow_mut().push(route);
    }
}

/// A fully wired app over in-memory collaborators
pub struct Harness {
    pub app: App,
    pub navigator: Rc<RecordingNavigator>,
    pub storage: Rc<MemoryStorage>,
}

impl Harness {
    pub fn new(transport: Rc<dyn HttpTransport>) -> Self {
        Self::with_policy(transport, StaleResponsePolicy::LastWriteWins)
    }

    pub fn with_policy(transport: Rc<dyn HttpTransport>, policy: StaleResponsePolicy) -> Self {
        let config = AppConfig {
            api_base_url: BASE_URL.to_string(),
            stale_response_policy: policy,
            ..AppConfig::default()
        };
        let navigator = RecordingNavigator::new();
        let storage = Rc::new(MemoryStorage::new());
        let app = App::new(&config, transport, storage.clone(), navigator.clone());
        Self { app, navigator, storage }
    }

    pub fn logged_in(transport: Rc<dyn HttpTransport>, role: Role) -> Self {
        let harness = Self::new(transport);
        harness.app.state.session().establish(session_with_role("u1", role));
        harness
    }
}
