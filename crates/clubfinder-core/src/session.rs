//! Search state and the single owner that applies search outcomes to it.
//!
//! Every search takes a [`SearchTicket`] from [`SearchSession::begin`] and
//! hands its outcome back through [`SearchSession::complete`]. An outcome
//! whose ticket is older than the last one applied is discarded, so a slow
//! search can never overwrite the results of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::filter::ClubMatch;
use crate::geo::Coordinate;
use crate::CoreError;

/// Rejects blank addresses before any network call is made.
///
/// # Errors
///
/// Returns [`CoreError::EmptyAddress`] for empty or whitespace-only input.
pub fn validate_address(address: &str) -> Result<&str, CoreError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        Err(CoreError::EmptyAddress)
    } else {
        Ok(trimmed)
    }
}

/// Result of one search attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Geocoding and the club fetch both succeeded.
    Found {
        location: Coordinate,
        matches: Vec<ClubMatch>,
    },
    /// Input was rejected before any request was made.
    Rejected(CoreError),
    /// The geocoder returned no candidates.
    NotFound { address: String },
    /// A request failed or returned data of the wrong shape.
    Failed { reason: String },
}

/// What the user currently sees.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub user_location: Option<Coordinate>,
    pub results: Vec<ClubMatch>,
    /// Message for the most recent unsuccessful search, cleared on success.
    pub notice: Option<String>,
}

impl SearchState {
    /// Next state after `outcome`.
    ///
    /// Only a successful search replaces the location and results; every
    /// other outcome keeps them and records a notice.
    #[must_use]
    pub fn apply(self, outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found { location, matches } => Self {
                user_location: Some(location),
                results: matches,
                notice: None,
            },
            SearchOutcome::Rejected(err) => Self {
                notice: Some(err.to_string()),
                ..self
            },
            SearchOutcome::NotFound { address } => Self {
                notice: Some(format!("address not found: {address}")),
                ..self
            },
            SearchOutcome::Failed { reason } => Self {
                notice: Some(format!("search failed: {reason}")),
                ..self
            },
        }
    }
}

/// Sequence token identifying one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

struct Inner {
    state: SearchState,
    last_applied: u64,
}

/// Owner of the [`SearchState`]. Shareable across tasks.
pub struct SearchSession {
    next_ticket: AtomicU64,
    inner: Mutex<Inner>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_ticket: AtomicU64::new(1),
            inner: Mutex::new(Inner {
                state: SearchState::default(),
                last_applied: 0,
            }),
        }
    }

    /// Issues the ticket for a new search.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst))
    }

    /// Applies `outcome` unless a newer search has already been applied.
    ///
    /// Returns `true` when the state changed hands to this outcome.
    pub fn complete(&self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 <= inner.last_applied {
            tracing::warn!(
                ticket = ticket.0,
                last_applied = inner.last_applied,
                "discarding outcome of superseded search"
            );
            return false;
        }
        inner.last_applied = ticket.0;
        let current = std::mem::take(&mut inner.state);
        inner.state = current.apply(outcome);
        true
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }
}
