// ============================================================================
// LOAD STATE - loading flag, last error and response fencing of one store
// ============================================================================

use crate::config::StaleResponsePolicy;

/// Whether an operation takes part in stale-response fencing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// Create/update/delete: always applied
    None,
    /// Replaces the whole collection: subject to the store's policy
    Replace,
}

/// Issued on `pending`, handed back when the request settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: Option<u64>,
}

impl Ticket {
    pub fn sequence(&self) -> Option<u64> {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadState {
    in_flight: usize,
    error: Option<String>,
    policy: StaleResponsePolicy,
    issued: u64,
    applied: u64,
}

impl LoadState {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self { in_flight: 0, error: None, policy, issued: 0, applied: 0 }
    }

    /// True while at least one request of this store is unsettled
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn begin(&mut self, fence: Fence) -> Ticket {
        self.in_flight += 1;
        self.error = None;
        match fence {
            Fence::Replace => {
                self.issued += 1;
                Ticket { seq: Some(self.issued) }
            }
            Fence::None => Ticket { seq: None },
        }
    }

    /// Settle a success. Returns whether its mutation must be applied.
    pub fn fulfill(&mut self, ticket: Ticket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.is_stale(ticket) {
            return false;
        }
        if let Some(seq) = ticket.seq {
            self.applied = self.applied.max(seq);
        }
        self.error = None;
        true
    }

    /// Settle a failure. Returns whether the message was recorded.
    pub fn reject(&mut self, ticket: Ticket, message: String) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.is_stale(ticket) {
            return false;
        }
        self.error = Some(message);
        true
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        match (self.policy, ticket.seq) {
            (StaleResponsePolicy::DiscardStale, Some(seq)) => seq < self.applied,
            _ => false,
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::new(StaleResponsePolicy::default())
    }
}

/// A store driven through pending/fulfilled/rejected phases
pub trait Lifecycle {
    fn load_state(&self) -> &LoadState;
    fn load_state_mut(&mut self) -> &mut LoadState;

    fn loading(&self) -> bool {
        self.load_state().loading()
    }

    fn error(&self) -> Option<&str> {
        self.load_state().error()
    }
}
