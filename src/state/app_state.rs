// ============================================================================
// APP STATE - every resource store of the application
// ============================================================================
// Stores never read each other. The only shared piece is the session
// context, which the API client reads (token) and clears (401).
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::state::{
    resource_state, ActivitiesState, AttendanceState, AuthState, BloodRequirementsState,
    SessionContext, VolunteersState,
};
use crate::utils::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub activities: ActivitiesState,
    pub blood_requirements: BloodRequirementsState,
    pub attendance: AttendanceState,
    pub volunteers: VolunteersState,
}

impl AppState {
    /// Fresh stores; the session is restored from `storage`
    pub fn new(config: &AppConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        let policy = config.stale_response_policy;
        Self {
            auth: AuthState::new(SessionContext::restore(storage), policy),
            activities: ActivitiesState::new(policy),
            blood_requirements: resource_state(policy),
            attendance: resource_state(policy),
            volunteers: resource_state(policy),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.auth.session
    }

    /// Push one callback to every store (a view re-render, typically)
    pub fn subscribe_all<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = Rc::new(callback);
        macro_rules! forward {
            ($target:expr) => {{
                let callback = callback.clone();
                $target.subscribe(move || (*callback)());
            }};
        }
        forward!(self.auth.session);
        forward!(self.auth.store);
        forward!(self.activities.store);
        forward!(self.activities.selected);
        forward!(self.blood_requirements);
        forward!(self.attendance);
        forward!(self.volunteers);
    }
}
