//! reliefledger - Deterministic disbursement ledger for crisis-relief programs
//!
//! A role-gated state machine over global and per-account state: fiat
//! deposits, NGO authorization, crisis badges, threshold-bounded emergency
//! disbursal, and balance transfers, with all-or-nothing application of
//! every mutation. Authentication, transport, and durable persistence belong
//! to the surrounding environment; it hands the ledger an authenticated
//! caller identity and a strictly increasing transaction sequence number,
//! and persists the typed deltas the ledger returns.

pub mod dispatch;
pub mod identity;
pub mod ledger;
pub mod service;
