// Ledger State - Global and per-account partitions of the relief ledger
//
// Two partitions:
// - GlobalState: singleton, created once at initialization, mutated only by
//   privileged operations
// - AccountRecord: one per participant, created lazily on the first committed
//   write that touches the account

use crate::identity::AccountId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default deposit ceiling in micro-units
pub const DEFAULT_DEPOSIT_LIMIT: u64 = 10_000_000;

/// Default maximum single emergency disbursal in micro-units
pub const DEFAULT_EMERGENCY_THRESHOLD: u64 = 5_000_000;

/// Who may record fiat deposits
///
/// The deposit path has no role check of its own; this policy makes the
/// choice explicit instead of hard-coding either reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositPolicy {
    /// Any caller may credit any account (deposits arrive via a trusted
    /// off-ledger payment bridge that already authenticated the funds)
    Open,
    /// Only the designated bridge identity may record deposits
    BridgeOnly(AccountId),
}

/// Initialization parameters for a ledger instance
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Configured deposit ceiling (stored, not currently enforced)
    pub deposit_limit: u64,
    /// Maximum amount payable in a single emergency disbursal
    pub emergency_threshold: u64,
    /// Deposit authorization policy
    pub deposit_policy: DepositPolicy,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            deposit_limit: DEFAULT_DEPOSIT_LIMIT,
            emergency_threshold: DEFAULT_EMERGENCY_THRESHOLD,
            deposit_policy: DepositPolicy::Open,
        }
    }
}

/// The singleton system-wide partition
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalState {
    /// Account that created the ledger; informational, not checked by any operation
    pub(crate) owner: AccountId,
    /// Account authorized to register NGOs and change system parameters
    pub(crate) admin: AccountId,
    /// Global kill switch; deposits are rejected while false
    pub(crate) system_active: bool,
    /// Configured deposit ceiling (stored, not currently enforced)
    pub(crate) deposit_limit: u64,
    /// Maximum single emergency disbursal
    pub(crate) emergency_threshold: u64,
    /// Number of distinct accounts authorized as NGOs (monotonic)
    pub(crate) ngo_count: u64,
    /// Number of distinct accounts ever granted a crisis badge (monotonic)
    pub(crate) crisis_count: u64,
    /// Cumulative sum of all fiat deposits ever recorded (audit counter)
    pub(crate) token_total: u64,
    /// Funds available for emergency disbursal; credited by deposits,
    /// debited by disbursals, never negative
    pub(crate) liquidity_pool: u64,
}

impl GlobalState {
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn admin(&self) -> &AccountId {
        &self.admin
    }

    pub fn system_active(&self) -> bool {
        self.system_active
    }

    pub fn deposit_limit(&self) -> u64 {
        self.deposit_limit
    }

    pub fn emergency_threshold(&self) -> u64 {
        self.emergency_threshold
    }

    pub fn ngo_count(&self) -> u64 {
        self.ngo_count
    }

    pub fn crisis_count(&self) -> u64 {
        self.crisis_count
    }

    pub fn token_total(&self) -> u64 {
        self.token_total
    }

    pub fn liquidity_pool(&self) -> u64 {
        self.liquidity_pool
    }
}

/// The per-participant partition
///
/// All fields default to zero/false; a record holding default values is
/// indistinguishable from a never-seen account through the query interface.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountRecord {
    /// True iff this account is a registered NGO
    pub(crate) authorized: bool,
    /// Reserved for NGO reputation scoring; not mutated by any current operation
    pub(crate) rating: u64,
    /// Reserved running total of disbursals made by this NGO; not mutated
    /// by any current operation
    pub(crate) total_disbursed: u64,
    /// Spendable balance in micro-units
    pub(crate) balance: u64,
    /// True iff certified as a crisis-affected beneficiary by an NGO
    pub(crate) crisis_badge: bool,
    /// Sequence number of the most recent committed mutation touching this account
    pub(crate) last_transaction_seq: u64,
}

impl AccountRecord {
    pub fn authorized(&self) -> bool {
        self.authorized
    }

    pub fn rating(&self) -> u64 {
        self.rating
    }

    pub fn total_disbursed(&self) -> u64 {
        self.total_disbursed
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn crisis_badge(&self) -> bool {
        self.crisis_badge
    }

    pub fn last_transaction_seq(&self) -> u64 {
        self.last_transaction_seq
    }
}

/// Snapshot returned by the system-status query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub system_active: bool,
    pub liquidity_pool: u64,
    pub token_total: u64,
}

/// The full ledger state - the (global, accounts) tuple every operation
/// transitions over
///
/// Owned and passed by reference into the apply path; there is no
/// ambient/global instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerState {
    global: GlobalState,
    accounts: HashMap<AccountId, AccountRecord>,
    deposit_policy: DepositPolicy,
}

impl LedgerState {
    /// Initialize a new ledger instance
    ///
    /// The creator becomes both owner and admin. Initialization happens
    /// exactly once, here, before the call interface is exposed; there is
    /// no runtime re-initialization path.
    pub fn initialize(creator: AccountId, config: LedgerConfig) -> Self {
        Self {
            global: GlobalState {
                owner: creator,
                admin: creator,
                system_active: true,
                deposit_limit: config.deposit_limit,
                emergency_threshold: config.emergency_threshold,
                ngo_count: 0,
                crisis_count: 0,
                token_total: 0,
                liquidity_pool: 0,
            },
            accounts: HashMap::new(),
            deposit_policy: config.deposit_policy,
        }
    }

    /// Access the global partition
    pub fn global(&self) -> &GlobalState {
        &self.global
    }

    /// The active deposit authorization policy
    pub fn deposit_policy(&self) -> DepositPolicy {
        self.deposit_policy
    }

    /// Look up an account record, if one has ever been written
    pub fn account(&self, id: &AccountId) -> Option<&AccountRecord> {
        self.accounts.get(id)
    }

    /// Number of account records that have been materialized
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // ========================================================================
    // QUERY OPERATIONS - pure reads, never materialize a record
    // ========================================================================

    /// Spendable balance; zero for never-seen accounts
    pub fn balance(&self, id: &AccountId) -> u64 {
        self.accounts.get(id).map_or(0, |a| a.balance)
    }

    /// Whether the global kill switch is on
    pub fn system_active(&self) -> bool {
        self.global.system_active
    }

    /// Whether the account is a registered NGO; false for never-seen accounts
    pub fn ngo_status(&self, id: &AccountId) -> bool {
        self.accounts.get(id).map_or(false, |a| a.authorized)
    }

    /// Whether the account holds a crisis badge; false for never-seen accounts
    pub fn crisis_badge(&self, id: &AccountId) -> bool {
        self.accounts.get(id).map_or(false, |a| a.crisis_badge)
    }

    /// Combined system snapshot: (active, liquidity pool, token total)
    pub fn system_status(&self) -> SystemStatus {
        SystemStatus {
            system_active: self.global.system_active,
            liquidity_pool: self.global.liquidity_pool,
            token_total: self.global.token_total,
        }
    }

    // ========================================================================
    // COMMIT-PATH ACCESS - used by the apply path only, after every
    // precondition has passed
    // ========================================================================

    pub(crate) fn global_mut(&mut self) -> &mut GlobalState {
        &mut self.global
    }

    /// Materialize (or fetch) the record for an account being written
    pub(crate) fn account_mut(&mut self, id: AccountId) -> &mut AccountRecord {
        self.accounts.entry(id).or_default()
    }
}
