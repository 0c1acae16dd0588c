// ============================================================================
// AUTH STATE - session context + auth call lifecycle
// ============================================================================

use crate::config::StaleResponsePolicy;
use crate::models::Session;
use crate::state::{ReactiveState, SessionContext};
use crate::stores::AuthStore;

#[derive(Clone)]
pub struct AuthState {
    pub session: SessionContext,
    pub store: ReactiveState<AuthStore>,
}

impl AuthState {
    pub fn new(session: SessionContext, policy: StaleResponsePolicy) -> Self {
        Self { session, store: ReactiveState::new(AuthStore::new(policy)) }
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }
}
