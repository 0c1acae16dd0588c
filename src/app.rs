// ============================================================================
// APP - wires stores, API client and view models together
// ============================================================================
// One ApiClient (and so one SessionContext) is shared by every view model,
// which is what lets a 401 from any resource end the session for all.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{Credentials, Session};
use crate::navigation::{AdminSection, BrowserNavigator, GuardDecision, Navigator, Route, SessionGuard};
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::state::AppState;
use crate::utils::{BrowserStorage, KeyValueStore, MemoryStorage};
use crate::viewmodels::{
    ActivitiesViewModel, AttendanceViewModel, AuthViewModel, BloodRequirementsViewModel,
    VolunteersViewModel,
};

pub struct App {
    pub state: AppState,
    pub api: ApiClient,
    pub auth: AuthViewModel,
    pub activities: ActivitiesViewModel,
    pub blood_requirements: BloodRequirementsViewModel,
    pub attendance: AttendanceViewModel,
    pub volunteers: VolunteersViewModel,
    navigator: Rc<dyn Navigator>,
}

impl App {
    pub fn new(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        storage: Rc<dyn KeyValueStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let state = AppState::new(config, storage);
        let api = ApiClient::new(
            config.api_base_url.clone(),
            transport,
            state.session().clone(),
            navigator.clone(),
        );

        log::info!("🚀 App wired against {} ({})", api.base_url(), config.environment);

        Self {
            auth: AuthViewModel::new(api.clone(), state.auth.clone()),
            activities: ActivitiesViewModel::new(api.clone(), state.activities.clone()),
            blood_requirements: BloodRequirementsViewModel::new(
                api.clone(),
                state.blood_requirements.clone(),
            ),
            attendance: AttendanceViewModel::new(api.clone(), state.attendance.clone()),
            volunteers: VolunteersViewModel::new(api.clone(), state.volunteers.clone()),
            state,
            api,
            navigator,
        }
    }

    /// Browser collaborators; falls back to in-memory storage when
    /// `localStorage` is blocked.
    pub fn browser(config: &AppConfig) -> Self {
        let storage: Rc<dyn KeyValueStore> = match BrowserStorage::available() {
            Some(storage) => Rc::new(storage),
            None => {
                log::warn!("⚠️ localStorage unavailable, session will not survive a reload");
                Rc::new(MemoryStorage::new())
            }
        };
        Self::new(config, Rc::new(GlooTransport), storage, Rc::new(BrowserNavigator))
    }

    pub fn session(&self) -> Option<Session> {
        self.state.session().current()
    }

    pub fn guard(&self, route: Route) -> GuardDecision {
        SessionGuard::check_route(route, self.session().as_ref())
    }

    /// Resolve `path` and apply its guard. Returns the route to render, or
    /// `None` after redirecting elsewhere.
    pub fn enter(&self, path: &str) -> Option<Route> {
        let Some(route) = Route::from_path(path) else {
            log::warn!("⚠️ Unknown path {}, going home", path);
            self.navigator.redirect(Route::Home);
            return None;
        };
        match self.guard(route) {
            GuardDecision::Allow => Some(route),
            GuardDecision::Redirect(target) => {
                log::info!("🚧 {} is guarded, redirecting to {}", route.path(), target.path());
                self.navigator.redirect(target);
                None
            }
        }
    }

    /// Fetch whatever the screen behind `route` renders. Failures are
    /// already recorded in the stores, so they are not returned.
    pub async fn load(&self, route: Route) {
        match route {
            Route::Home | Route::Activities | Route::Admin(AdminSection::Activities) => {
                let _ = self.activities.fetch_activities().await;
            }
            Route::BloodRequirements | Route::Admin(AdminSection::BloodRequirements) => {
                let _ = self.blood_requirements.fetch_requirements().await;
            }
            Route::Profile => {
                let _ = self.auth.fetch_profile().await;
            }
            Route::MyAttendance => {
                let Some(session) = self.session() else { return };
                let _ = futures::join!(
                    self.activities.fetch_activities(),
                    self.attendance.fetch_user_attendance(session.subject_id()),
                );
            }
            Route::Admin(AdminSection::Dashboard) => {
                let _ = futures::join!(
                    self.activities.fetch_activities(),
                    self.blood_requirements.fetch_requirements(),
                    self.volunteers.fetch_volunteers(),
                );
            }
            Route::Admin(AdminSection::Volunteers) => {
                let _ = self.volunteers.fetch_volunteers().await;
            }
            Route::Admin(AdminSection::Attendance) => {
                let _ = futures::join!(
                    self.activities.fetch_activities(),
                    self.volunteers.fetch_volunteers(),
                );
            }
            Route::Login => {}
        }
    }

    /// Log in and move to the home page on success
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<(), String> {
        self.auth.login(credentials).await?;
        self.navigator.redirect(Route::Home);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.auth.logout();
        self.navigator.redirect(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::test_support::{activity, blood_requirement, json, volunteer, Harness, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn guarded_paths_redirect_anonymous_visitors() {
        let h = Harness::new(MockTransport::new());

        assert_eq!(h.app.enter("/activities"), Some(Route::Activities));
        assert_eq!(h.app.enter("/my-attendance"), None);
        assert_eq!(h.app.enter("/admin/volunteers"), None);
        assert_eq!(h.navigator.redirects(), vec![Route::Login, Route::Login]);
    }

    #[test]
    fn volunteers_are_sent_home_from_admin() {
        let h = Harness::logged_in(MockTransport::new(), Role::Volunteer);

        assert_eq!(h.app.enter("/profile"), Some(Route::Profile));
        assert_eq!(h.app.enter("/admin"), None);
        assert_eq!(h.navigator.redirects(), vec![Route::Home]);
    }

    #[test]
    fn admins_enter_admin_sections() {
        let h = Harness::logged_in(MockTransport::new(), Role::Admin);
        assert_eq!(
            h.app.enter("/admin/attendance"),
            Some(Route::Admin(AdminSection::Attendance))
        );
        assert!(h.navigator.redirects().is_empty());
    }

    #[test]
    fn unknown_path_goes_home() {
        let h = Harness::new(MockTransport::new());
        assert_eq!(h.app.enter("/nowhere"), None);
        assert_eq!(h.navigator.redirects(), vec![Route::Home]);
    }

    #[test]
    fn dashboard_load_fills_three_stores() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Admin);
        transport
            .respond(200, json!([json(&activity("a1"))]))
            .respond(200, json!([json(&blood_requirement("b1"))]))
            .respond(200, json!([json(&volunteer("v1"))]));

        block_on(h.app.load(Route::Admin(AdminSection::Dashboard)));

        assert_eq!(h.app.state.activities.store.items().len(), 1);
        assert_eq!(h.app.state.blood_requirements.items().len(), 1);
        assert_eq!(h.app.state.volunteers.items().len(), 1);
    }

    #[test]
    fn one_store_401_ends_the_session_for_all() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Admin);
        transport
            .respond(200, json!([json(&activity("a1"))]))
            .respond(200, json!([json(&blood_requirement("b1"))]))
            .respond(401, json!({"message": "Token expired"}));

        block_on(h.app.load(Route::Admin(AdminSection::Dashboard)));

        assert!(h.app.session().is_none());
        assert_eq!(h.app.state.activities.store.error(), None);
        assert_eq!(h.app.state.volunteers.error().as_deref(), Some("Token expired"));
        assert_eq!(h.app.enter("/admin"), None);
        assert_eq!(h.navigator.redirects(), vec![Route::Login, Route::Login]);
    }

    #[test]
    fn sign_in_then_out() {
        let transport = MockTransport::new();
        let h = Harness::new(transport.clone());
        transport.respond(
            200,
            json!({"token": "t1", "user": {"_id": "u1", "name": "Admin", "role": "admin"}}),
        );

        block_on(h.app.sign_in(&Credentials::new("admin@tce.edu", "admin123"))).unwrap();
        assert!(h.app.session().is_some_and(|s| s.is_admin()));

        h.app.sign_out();
        assert!(h.app.session().is_none());
        assert_eq!(h.navigator.redirects(), vec![Route::Home, Route::Login]);
    }

    #[test]
    fn my_attendance_loads_own_records() {
        let transport = MockTransport::new();
        let h = Harness::logged_in(transport.clone(), Role::Volunteer);
        transport.respond(200, json!([])).respond(200, json!([]));

        block_on(h.app.load(Route::MyAttendance));

        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls.contains(&"http://api.test/api/attendance/user/u1".to_string()));
    }
}
