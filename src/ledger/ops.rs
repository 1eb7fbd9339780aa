// Ledger Operations - The transitions of the state machine
//
// Every operation is a pure function from (state, caller, seq, args) to
// either a committed StateDelta or a typed rejection that leaves the state
// untouched. All preconditions are validated before the first write, so a
// rejected call can never have partial effects.

use crate::identity::AccountId;
use crate::ledger::delta::{StateChange, StateDelta};
use crate::ledger::state::{DepositPolicy, LedgerState, SystemStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an operation is rejected
///
/// Rejections are synchronous, local, and non-fatal: the ledger keeps
/// serving calls, and the rejected call has no effect at all.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Caller lacks the required role for this operation")]
    Unauthorized,

    #[error("System is inactive: deposits are disabled")]
    SystemInactive,

    #[error("Beneficiary does not hold a crisis badge")]
    NotEligible,

    #[error("Disbursal exceeds emergency threshold: amount {amount}, threshold {threshold}")]
    ExceedsThreshold { amount: u64, threshold: u64 },

    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: u64, required: u64 },

    #[error("Insufficient liquidity in pool: available {available}, required {required}")]
    InsufficientLiquidity { available: u64, required: u64 },

    #[error("Account balance is zero")]
    ZeroBalance,

    #[error("Arithmetic overflow: amount exceeds the representable range")]
    Overflow,
}

/// A state-mutating operation with its typed arguments
///
/// Note there is no `Initialize` variant: initialization is the
/// `LedgerState::initialize` constructor and cannot be invoked through the
/// call interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Credit a fiat deposit to an account (and the liquidity pool)
    RecordDeposit { account: AccountId, amount: u64 },
    /// Register an account as an authorized NGO (admin only)
    AuthorizeNgo { ngo: AccountId },
    /// Certify a beneficiary as crisis-affected (authorized NGOs only)
    IssueCrisisBadge { beneficiary: AccountId },
    /// Pay emergency funds to a badged beneficiary out of the pool
    EmergencyDisbursal { beneficiary: AccountId, amount: u64 },
    /// Move balance between two accounts
    TransferBalance {
        from: AccountId,
        to: AccountId,
        amount: u64,
    },
    /// Stamp the virtual-card eligibility marker (no balance change)
    IssueVirtualCardMarker { account: AccountId },
    /// Overwrite deposit limit and emergency threshold (admin only)
    UpdateSystemSettings { new_limit: u64, new_threshold: u64 },
    /// Flip the global kill switch (admin only)
    SetSystemActive { active: bool },
}

impl Operation {
    /// Stable operation name, as used by the dispatch table
    pub fn name(&self) -> &'static str {
        match self {
            Operation::RecordDeposit { .. } => "record_deposit",
            Operation::AuthorizeNgo { .. } => "authorize_ngo",
            Operation::IssueCrisisBadge { .. } => "issue_crisis_badge",
            Operation::EmergencyDisbursal { .. } => "emergency_disbursal",
            Operation::TransferBalance { .. } => "transfer_balance",
            Operation::IssueVirtualCardMarker { .. } => "issue_virtual_card",
            Operation::UpdateSystemSettings { .. } => "update_system_settings",
            Operation::SetSystemActive { .. } => "set_system_active",
        }
    }
}

/// A fully typed call as handed over by the environment, carrying the
/// authenticated caller and its assigned position in the total order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEnvelope {
    pub caller: AccountId,
    pub seq: u64,
    pub operation: Operation,
}

/// A read-only query
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    GetBalance { account: AccountId },
    GetSystemActive,
    GetNgoStatus { account: AccountId },
    GetSystemStatus,
}

/// Result of a query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryResult {
    Amount(u64),
    Flag(bool),
    Status(SystemStatus),
}

impl LedgerState {
    /// Apply one operation as the given caller at the given sequence position
    ///
    /// Validate-then-apply: every precondition (including overflow checks on
    /// staged values) is evaluated before anything is written. On rejection
    /// the state is bit-for-bit unchanged, and no account record is
    /// materialized.
    pub fn apply(
        &mut self,
        caller: AccountId,
        seq: u64,
        op: &Operation,
    ) -> Result<StateDelta, LedgerError> {
        let change = match *op {
            Operation::RecordDeposit { account, amount } => {
                self.record_deposit(caller, seq, account, amount)?
            }
            Operation::AuthorizeNgo { ngo } => self.authorize_ngo(caller, seq, ngo)?,
            Operation::IssueCrisisBadge { beneficiary } => {
                self.issue_crisis_badge(caller, seq, beneficiary)?
            }
            Operation::EmergencyDisbursal {
                beneficiary,
                amount,
            } => self.emergency_disbursal(seq, beneficiary, amount)?,
            Operation::TransferBalance { from, to, amount } => {
                self.transfer_balance(seq, from, to, amount)?
            }
            Operation::IssueVirtualCardMarker { account } => {
                self.issue_virtual_card_marker(seq, account)?
            }
            Operation::UpdateSystemSettings {
                new_limit,
                new_threshold,
            } => self.update_system_settings(caller, new_limit, new_threshold)?,
            Operation::SetSystemActive { active } => self.set_system_active(caller, active)?,
        };

        Ok(StateDelta { seq, caller, change })
    }

    /// Run a read-only query; never fails, never writes
    pub fn run_query(&self, query: &Query) -> QueryResult {
        match query {
            Query::GetBalance { account } => QueryResult::Amount(self.balance(account)),
            Query::GetSystemActive => QueryResult::Flag(self.system_active()),
            Query::GetNgoStatus { account } => QueryResult::Flag(self.ngo_status(account)),
            Query::GetSystemStatus => QueryResult::Status(self.system_status()),
        }
    }

    // ========================================================================
    // TRANSITIONS - each validates fully, then commits
    // ========================================================================

    fn record_deposit(
        &mut self,
        caller: AccountId,
        seq: u64,
        account: AccountId,
        amount: u64,
    ) -> Result<StateChange, LedgerError> {
        if !self.system_active() {
            return Err(LedgerError::SystemInactive);
        }
        if let DepositPolicy::BridgeOnly(bridge) = self.deposit_policy() {
            if caller != bridge {
                return Err(LedgerError::Unauthorized);
            }
        }

        let new_balance = self
            .balance(&account)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let token_total = self
            .global()
            .token_total()
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let liquidity_pool = self
            .global()
            .liquidity_pool()
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let record = self.account_mut(account);
        record.balance = new_balance;
        record.last_transaction_seq = seq;
        let global = self.global_mut();
        global.token_total = token_total;
        global.liquidity_pool = liquidity_pool;

        Ok(StateChange::DepositRecorded {
            account,
            amount,
            new_balance,
            token_total,
            liquidity_pool,
        })
    }

    fn authorize_ngo(
        &mut self,
        caller: AccountId,
        seq: u64,
        ngo: AccountId,
    ) -> Result<StateChange, LedgerError> {
        if caller != *self.global().admin() {
            return Err(LedgerError::Unauthorized);
        }

        // Counter tracks distinct NGOs: re-authorizing is a committed no-op
        let newly_authorized = !self.ngo_status(&ngo);

        let record = self.account_mut(ngo);
        record.authorized = true;
        record.last_transaction_seq = seq;
        if newly_authorized {
            self.global_mut().ngo_count += 1;
        }

        Ok(StateChange::NgoAuthorized {
            ngo,
            newly_authorized,
            ngo_count: self.global().ngo_count(),
        })
    }

    fn issue_crisis_badge(
        &mut self,
        caller: AccountId,
        seq: u64,
        beneficiary: AccountId,
    ) -> Result<StateChange, LedgerError> {
        if !self.ngo_status(&caller) {
            return Err(LedgerError::Unauthorized);
        }

        let newly_badged = !self.crisis_badge(&beneficiary);

        let record = self.account_mut(beneficiary);
        record.crisis_badge = true;
        record.last_transaction_seq = seq;
        if newly_badged {
            self.global_mut().crisis_count += 1;
        }

        Ok(StateChange::CrisisBadgeIssued {
            beneficiary,
            issued_by: caller,
            newly_badged,
            crisis_count: self.global().crisis_count(),
        })
    }

    fn emergency_disbursal(
        &mut self,
        seq: u64,
        beneficiary: AccountId,
        amount: u64,
    ) -> Result<StateChange, LedgerError> {
        if !self.crisis_badge(&beneficiary) {
            return Err(LedgerError::NotEligible);
        }
        let threshold = self.global().emergency_threshold();
        if amount > threshold {
            return Err(LedgerError::ExceedsThreshold { amount, threshold });
        }
        let pool = self.global().liquidity_pool();
        if amount > pool {
            return Err(LedgerError::InsufficientLiquidity {
                available: pool,
                required: amount,
            });
        }

        let new_balance = self
            .balance(&beneficiary)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let liquidity_pool = pool.checked_sub(amount).ok_or(LedgerError::Overflow)?;

        let record = self.account_mut(beneficiary);
        record.balance = new_balance;
        record.last_transaction_seq = seq;
        self.global_mut().liquidity_pool = liquidity_pool;

        Ok(StateChange::EmergencyDisbursed {
            beneficiary,
            amount,
            new_balance,
            liquidity_pool,
        })
    }

    fn transfer_balance(
        &mut self,
        seq: u64,
        from: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<StateChange, LedgerError> {
        let available = self.balance(&from);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                available,
                required: amount,
            });
        }

        if from == to {
            // Debit and credit cancel; still stamps the account's activity
            let record = self.account_mut(from);
            record.last_transaction_seq = seq;
            let balance = record.balance;
            return Ok(StateChange::BalanceTransferred {
                from,
                to,
                amount,
                from_balance: balance,
                to_balance: balance,
            });
        }

        // Checked even though the sufficiency guard already holds
        let from_balance = available.checked_sub(amount).ok_or(LedgerError::Overflow)?;
        let to_balance = self
            .balance(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let sender = self.account_mut(from);
        sender.balance = from_balance;
        sender.last_transaction_seq = seq;
        let recipient = self.account_mut(to);
        recipient.balance = to_balance;
        recipient.last_transaction_seq = seq;

        Ok(StateChange::BalanceTransferred {
            from,
            to,
            amount,
            from_balance,
            to_balance,
        })
    }

    fn issue_virtual_card_marker(
        &mut self,
        seq: u64,
        account: AccountId,
    ) -> Result<StateChange, LedgerError> {
        let balance = self.balance(&account);
        if balance == 0 {
            return Err(LedgerError::ZeroBalance);
        }

        self.account_mut(account).last_transaction_seq = seq;

        Ok(StateChange::VirtualCardMarked { account, balance })
    }

    fn update_system_settings(
        &mut self,
        caller: AccountId,
        new_limit: u64,
        new_threshold: u64,
    ) -> Result<StateChange, LedgerError> {
        if caller != *self.global().admin() {
            return Err(LedgerError::Unauthorized);
        }

        let global = self.global_mut();
        global.deposit_limit = new_limit;
        global.emergency_threshold = new_threshold;

        Ok(StateChange::SystemSettingsUpdated {
            deposit_limit: new_limit,
            emergency_threshold: new_threshold,
        })
    }

    fn set_system_active(
        &mut self,
        caller: AccountId,
        active: bool,
    ) -> Result<StateChange, LedgerError> {
        if caller != *self.global().admin() {
            return Err(LedgerError::Unauthorized);
        }

        self.global_mut().system_active = active;

        Ok(StateChange::SystemActiveSet { active })
    }
}
