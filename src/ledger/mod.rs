// Ledger module - THE STATE MACHINE
// Global and per-account state, the role-gated transitions over it, the
// typed record of committed effects, and the boundary codec

mod codec;
mod delta;
mod ops;
mod state;

pub use codec::{CodecError, LedgerCodec};
pub use delta::{StateChange, StateDelta};
pub use ops::{CallEnvelope, LedgerError, Operation, Query, QueryResult};
pub use state::{
    AccountRecord, DepositPolicy, GlobalState, LedgerConfig, LedgerState, SystemStatus,
    DEFAULT_DEPOSIT_LIMIT, DEFAULT_EMERGENCY_THRESHOLD,
};
