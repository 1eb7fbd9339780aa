// State Delta - Typed record of a committed mutation
//
// The typed replacement for the source system's off-chain event log lines:
// each accepted call yields one delta carrying the concrete values written,
// attributed to exactly one caller and one sequence number. The hosting
// environment persists deltas to make accepted calls durable.

use crate::identity::AccountId;
use serde::{Deserialize, Serialize};

/// The concrete effect of one committed operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChange {
    /// A fiat deposit was credited
    DepositRecorded {
        account: AccountId,
        amount: u64,
        new_balance: u64,
        token_total: u64,
        liquidity_pool: u64,
    },
    /// An account was registered as an NGO
    ///
    /// `newly_authorized` is false when the account was already an NGO;
    /// in that case `ngo_count` did not move.
    NgoAuthorized {
        ngo: AccountId,
        newly_authorized: bool,
        ngo_count: u64,
    },
    /// A beneficiary was certified as crisis-affected
    CrisisBadgeIssued {
        beneficiary: AccountId,
        issued_by: AccountId,
        newly_badged: bool,
        crisis_count: u64,
    },
    /// Emergency funds were paid out of the liquidity pool
    EmergencyDisbursed {
        beneficiary: AccountId,
        amount: u64,
        new_balance: u64,
        liquidity_pool: u64,
    },
    /// Balance moved between two accounts
    BalanceTransferred {
        from: AccountId,
        to: AccountId,
        amount: u64,
        from_balance: u64,
        to_balance: u64,
    },
    /// A virtual-card eligibility marker was stamped (no balance change)
    VirtualCardMarked { account: AccountId, balance: u64 },
    /// Admin overwrote the system parameters
    SystemSettingsUpdated {
        deposit_limit: u64,
        emergency_threshold: u64,
    },
    /// Admin flipped the global kill switch
    SystemActiveSet { active: bool },
}

/// A committed mutation, attributed to one caller and one sequence ordinal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDelta {
    /// Transaction ordinal assigned by the environment
    pub seq: u64,
    /// Authenticated identity the mutation is attributed to
    pub caller: AccountId,
    /// The values written
    pub change: StateChange,
}

impl StateDelta {
    /// Operation name this delta resulted from (matches the dispatch table)
    pub fn operation_name(&self) -> &'static str {
        match &self.change {
            StateChange::DepositRecorded { .. } => "record_deposit",
            StateChange::NgoAuthorized { .. } => "authorize_ngo",
            StateChange::CrisisBadgeIssued { .. } => "issue_crisis_badge",
            StateChange::EmergencyDisbursed { .. } => "emergency_disbursal",
            StateChange::BalanceTransferred { .. } => "transfer_balance",
            StateChange::VirtualCardMarked { .. } => "issue_virtual_card",
            StateChange::SystemSettingsUpdated { .. } => "update_system_settings",
            StateChange::SystemActiveSet { .. } => "set_system_active",
        }
    }
}
