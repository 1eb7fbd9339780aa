// Service module - Serialized execution over one ledger instance

mod executor;

pub use executor::{LedgerService, ServiceError};
