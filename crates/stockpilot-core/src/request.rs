//! Per-call async request state.
//!
//! Views used to repeat the same loading-flag bookkeeping around every
//! facade call. [`RequestSlot`] consolidates that pattern: one slot per
//! target view, tracking status and payload, and tagging each request with
//! a monotonically increasing sequence number so a slow earlier response
//! can never overwrite a faster later one.

/// Status of a single tracked request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent request resolved with a payload.
    Success(T),
    /// The most recent request failed; previously displayed data stays
    /// available via [`RequestSlot::latest_value`].
    Failed(String),
}

impl<T> RequestState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Sequence ticket handed out by [`RequestSlot::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Owner of one view's request state.
///
/// Completions are only applied when they carry the newest ticket; stale
/// completions are discarded, leaving state and payload untouched.
#[derive(Debug)]
pub struct RequestSlot<T> {
    state: RequestState<T>,
    last_value: Option<T>,
    latest_ticket: u64,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestSlot<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            last_value: None,
            latest_ticket: 0,
        }
    }

    /// Mark a new request as in flight and return its ticket.
    ///
    /// Any outstanding earlier request becomes stale immediately.
    pub fn begin(&mut self) -> Ticket {
        self.latest_ticket += 1;
        self.state = RequestState::Loading;
        Ticket(self.latest_ticket)
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Last successfully applied payload, surviving later failures.
    pub fn latest_value(&self) -> Option<&T> {
        self.last_value.as_ref()
    }
}

impl<T: Clone> RequestSlot<T> {
    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }

        match outcome {
            Ok(value) => {
                self.last_value = Some(value.clone());
                self.state = RequestState::Success(value);
            }
            Err(message) => {
                self.state = RequestState::Failed(message);
            }
        }
        true
    }
}
