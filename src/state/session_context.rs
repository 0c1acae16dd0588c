// ============================================================================
// SESSION CONTEXT - the authenticated subject, shared explicitly
// ============================================================================
// Injected into the API client (bearer token, 401 clearing), the auth view
// model (login/logout) and the guard (navigation decisions).
// ============================================================================

use std::rc::Rc;

use crate::models::{Session, UserProfile};
use crate::state::ReactiveState;
use crate::utils::{
    load_from_storage, save_to_storage, KeyValueStore, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

#[derive(Clone)]
pub struct SessionContext {
    session: ReactiveState<Option<Session>>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionContext {
    /// Empty context; nothing is read from storage
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { session: ReactiveState::new(None), storage }
    }

    /// Context seeded from the persisted token + user, when both are readable
    pub fn restore(storage: Rc<dyn KeyValueStore>) -> Self {
        let token = storage.get_item(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty());
        let user = load_from_storage::<UserProfile>(storage.as_ref(), STORAGE_KEY_USER);

        let session = match (token, user) {
            (Some(token), Some(user)) => {
                log::info!("🔐 Session restored for {} ({:?})", user.id, user.role);
                Some(Session::new(user, token))
            }
            (None, None) => None,
            _ => {
                log::warn!("⚠️ Incomplete persisted session, discarding it");
                storage.remove_item(STORAGE_KEY_TOKEN);
                storage.remove_item(STORAGE_KEY_USER);
                None
            }
        };

        Self { session: ReactiveState::new(session), storage }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|session| session.as_ref().map(|s| s.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Replace the session wholesale and persist it
    pub fn establish(&self, session: Session) {
        if let Err(e) = self.storage.set_item(STORAGE_KEY_TOKEN, &session.token) {
            log::error!("❌ Could not persist token: {}", e);
        }
        if let Err(e) = save_to_storage(self.storage.as_ref(), STORAGE_KEY_USER, &session.user) {
            log::error!("❌ Could not persist user: {}", e);
        }
        self.session.set(Some(session));
    }

    /// Refresh the identity, keeping the credential. No-op when logged out.
    pub fn update_user(&self, user: UserProfile) {
        let Some(token) = self.token() else {
            log::warn!("⚠️ Profile received without a session, ignoring");
            return;
        };
        self.establish(Session::new(user, token));
    }

    /// Forget the session in memory and in storage
    pub fn clear(&self) {
        self.storage.remove_item(STORAGE_KEY_TOKEN);
        self.storage.remove_item(STORAGE_KEY_USER);
        if self.is_authenticated() {
            self.session.set(None);
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }
}
