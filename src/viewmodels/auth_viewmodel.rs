// ============================================================================
// AUTH VIEWMODEL - login, logout, registration, profile refresh
// ============================================================================
// The session is only written after the auth store has settled, so session
// subscribers never run while the store is borrowed.
// ============================================================================

use crate::error::ApiError;
use crate::models::{Credentials, Registration, Session};
use crate::services::ApiClient;
use crate::state::AuthState;
use crate::viewmodels::dispatcher::{dispatch, Action};

const LOGIN: Action = Action::new("auth/login", "Login failed. Please try again.");
const REGISTER: Action = Action::new("auth/register", "Registration failed");
const PROFILE: Action = Action::new("auth/getProfile", "Failed to load profile");

#[derive(Clone)]
pub struct AuthViewModel {
    api: ApiClient,
    state: AuthState,
}

impl AuthViewModel {
    pub fn new(api: ApiClient, state: AuthState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn current_session(&self) -> Option<Session> {
        self.state.current_session()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    /// On success the session is replaced wholesale and persisted. A failed
    /// login leaves any prior session alone.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), String> {
        let request = async {
            if !credentials.is_complete() {
                return Err(ApiError::Invalid("Email and password are required".to_string()));
            }
            let response = self.api.login(credentials).await?;
            response
                .into_session()
                .ok_or_else(|| ApiError::Invalid("Invalid response from server".to_string()))
        };

        let session = dispatch(&self.state.store, LOGIN, request, |_, session| session).await?;
        if let Some(session) = session {
            log::info!("✅ Logged in as {} ({:?})", session.subject_id(), session.role());
            self.state.session.establish(session);
        }
        Ok(())
    }

    pub fn logout(&self) {
        log::info!("👋 Logging out");
        self.state.session.clear();
        self.state.store.update(|store| store.clear_error());
    }

    /// Creates an account without logging into it
    pub async fn register(&self, registration: &Registration) -> Result<(), String> {
        dispatch(&self.state.store, REGISTER, self.api.register(registration), |store, user| {
            store.last_registered = user;
        })
        .await
        .map(drop)
    }

    /// Refresh the signed-in identity; the token is kept
    pub async fn fetch_profile(&self) -> Result<(), String> {
        let profile = dispatch(&self.state.store, PROFILE, self.api.get_profile(), |_, user| user).await?;
        if let Some(user) = profile {
            self.state.session.update_user(user);
        }
        Ok(())
    }

    pub fn clear_error(&self) {
        self.state.store.update(|store| store.clear_error());
    }
}
