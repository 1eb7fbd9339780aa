// Identity module - Participant account identifiers
// Authentication itself lives off-ledger; the ledger only carries opaque identities

mod account;

pub use account::*;
