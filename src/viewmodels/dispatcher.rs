// ============================================================================
// DISPATCHER - pending / fulfilled / rejected around one API call
// ============================================================================
// pending:   loading on, error cleared
// fulfilled: loading off (last in flight), mutation applied, error cleared
// rejected:  loading off (last in flight), message recorded, data untouched
// No retries, no timeouts, no cancellation.
// ============================================================================

use std::future::Future;

use crate::error::ApiError;
use crate::state::ReactiveState;
use crate::stores::{Fence, Lifecycle};

/// Describes one store operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    /// Shown when the service gave no message of its own
    pub fallback: &'static str,
    pub fence: Fence,
}

impl Action {
    pub const fn new(name: &'static str, fallback: &'static str) -> Self {
        Self { name, fallback, fence: Fence::None }
    }

    /// An operation whose result replaces the whole collection
    pub const fn replacing(name: &'static str, fallback: &'static str) -> Self {
        Self { name, fallback, fence: Fence::Replace }
    }
}

/// Run `request` through the lifecycle of `state`.
///
/// `apply` runs on fulfilment unless the response was fenced off as stale;
/// its result is handed back as `Ok(Some(..))`, a stale response gives
/// `Ok(None)`. A failure is written to the store and also returned.
pub async fn dispatch<S, R, T, Fut, A>(
    state: &ReactiveState<S>,
    action: Action,
    request: Fut,
    apply: A,
) -> Result<Option<T>, String>
where
    S: Lifecycle,
    Fut: Future<Output = Result<R, ApiError>>,
    A: FnOnce(&mut S, R) -> T,
{
    let ticket = state.update(|store| store.load_state_mut().begin(action.fence));
    log::debug!("⏳ {} pending (seq {:?})", action.name, ticket.sequence());

    match request.await {
        Ok(response) => {
            let applied = state.update(|store| {
                if store.load_state_mut().fulfill(ticket) {
                    Some(apply(store, response))
                } else {
                    None
                }
            });
            if applied.is_some() {
                log::debug!("✅ {} fulfilled", action.name);
            } else {
                log::info!("⏭️ {} fulfilled with a stale response, discarded", action.name);
            }
            Ok(applied)
        }
        Err(err) => {
            let message = err.user_message(action.fallback);
            let recorded = state.update(|store| store.load_state_mut().reject(ticket, message.clone()));
            if recorded {
                log::error!("❌ {} rejected: {}", action.name, err);
            } else {
                log::info!("⏭️ {} rejected after a newer response, ignored: {}", action.name, err);
            }
            Err(message)
        }
    }
}
