// Ledger Service - The single serialized mutation path
//
// The state machine itself is synchronous and single-threaded; this wrapper
// fences concurrent intake into one logical execution order behind a mutex,
// so two racing transfers can never both validate against a stale balance.
// It also enforces that accepted sequence numbers strictly increase.

use crate::ledger::{
    CallEnvelope, LedgerConfig, LedgerError, LedgerState, Query, QueryResult, StateDelta,
};
use crate::identity::AccountId;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};

/// Errors returned by the service boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The environment must assign strictly increasing sequence numbers;
    /// a repeated or out-of-order ordinal is refused before validation
    #[error("Stale sequence number: last accepted {last_seq}, got {seq}")]
    StaleSequence { last_seq: u64, seq: u64 },

    /// The operation itself was rejected; state is untouched
    #[error(transparent)]
    Rejected(#[from] LedgerError),
}

struct Inner {
    state: LedgerState,
    /// Highest sequence number accepted so far; 0 means none yet, so the
    /// environment's ordinals start at 1
    last_seq: u64,
}

/// Thread-safe owner of one ledger instance
pub struct LedgerService {
    inner: Mutex<Inner>,
}

impl LedgerService {
    /// Initialize a ledger and take ownership of it
    pub fn new(creator: AccountId, config: LedgerConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: LedgerState::initialize(creator, config),
                last_seq: 0,
            }),
        }
    }

    /// Execute one call in the total order
    ///
    /// Holds the mutex across validate-and-apply, so the sufficiency checks
    /// inside the state machine always see the latest committed state.
    pub fn execute(&self, envelope: &CallEnvelope) -> Result<StateDelta, ServiceError> {
        let mut inner = self.lock();

        if envelope.seq <= inner.last_seq {
            debug!(
                seq = envelope.seq,
                last_seq = inner.last_seq,
                "call refused: stale sequence number"
            );
            return Err(ServiceError::StaleSequence {
                last_seq: inner.last_seq,
                seq: envelope.seq,
            });
        }

        match inner
            .state
            .apply(envelope.caller, envelope.seq, &envelope.operation)
        {
            Ok(delta) => {
                inner.last_seq = envelope.seq;
                info!(
                    seq = delta.seq,
                    caller = %envelope.caller.short(),
                    operation = delta.operation_name(),
                    "mutation committed"
                );
                Ok(delta)
            }
            Err(err) => {
                debug!(
                    seq = envelope.seq,
                    caller = %envelope.caller.short(),
                    operation = envelope.operation.name(),
                    %err,
                    "call rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Run a read-only query against the current committed state
    pub fn query(&self, query: &Query) -> QueryResult {
        self.lock().state.run_query(query)
    }

    /// Highest sequence number accepted so far
    pub fn last_seq(&self) -> u64 {
        self.lock().last_seq
    }

    /// Clone of the full committed state, for the environment to persist
    pub fn snapshot(&self) -> LedgerState {
        self.lock().state.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // The apply path never panics mid-write, so a poisoned lock still
        // guards a consistent state
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
