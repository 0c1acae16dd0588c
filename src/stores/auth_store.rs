// ============================================================================
// AUTH STORE - lifecycle of login / profile / register calls
// ============================================================================
// The session itself lives in `SessionContext`; this store only carries what
// the login screen renders.
// ============================================================================

use crate::config::StaleResponsePolicy;
use crate::models::UserProfile;
use crate::stores::{LoadState, Lifecycle};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore {
    load: LoadState,
    /// Account created by the last successful registration
    pub last_registered: Option<UserProfile>,
}

impl AuthStore {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self { load: LoadState::new(policy), last_registered: None }
    }

    pub fn clear_error(&mut self) {
        self.load.clear_error();
    }
}

impl Lifecycle for AuthStore {
    fn load_state(&self) -> &LoadState {
        &self.load
    }

    fn load_state_mut(&mut self) -> &mut LoadState {
        &mut self.load
    }
}
