// Dispatch table - Operation name to typed handler, built once at startup
//
// The source system exposed methods through decorator metadata resolved at
// runtime; here the mapping is an explicit table from operation name to a
// typed decoder. Unknown names and malformed argument lists are rejected
// before they ever reach the state machine.

use crate::identity::AccountId;
use crate::ledger::{Operation, Query};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while resolving a named call into a typed request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown operation: '{0}'")]
    UnknownOperation(String),

    #[error("Wrong argument count for '{name}': expected {expected}, got {got}")]
    WrongArgumentCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Wrong argument type for '{name}' at position {index}: expected {expected}")]
    WrongArgumentType {
        name: &'static str,
        index: usize,
        expected: &'static str,
    },
}

/// An untyped argument as it arrives from the environment
///
/// The call interface carries only identities, unsigned integer amounts,
/// and boolean flags; anything richer is a collaborator concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgValue {
    Account(AccountId),
    Amount(u64),
    Flag(bool),
}

/// A resolved call: either a state mutation or a read-only query
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Mutate(Operation),
    Query(Query),
}

type Decoder = fn(&[ArgValue]) -> Result<Request, DispatchError>;

/// The operation-name dispatch table
///
/// Construct once and reuse; `decode` is a pure lookup plus argument
/// typing. There is deliberately no entry for initialization - a ledger
/// instance is initialized by construction, never through a call.
pub struct Dispatcher {
    table: HashMap<&'static str, Decoder>,
}

impl Dispatcher {
    /// Build the table with every recognized operation and query
    pub fn new() -> Self {
        let mut table: HashMap<&'static str, Decoder> = HashMap::new();
        table.insert("record_deposit", decode_record_deposit);
        table.insert("authorize_ngo", decode_authorize_ngo);
        table.insert("issue_crisis_badge", decode_issue_crisis_badge);
        table.insert("emergency_disbursal", decode_emergency_disbursal);
        table.insert("transfer_balance", decode_transfer_balance);
        table.insert("issue_virtual_card", decode_issue_virtual_card);
        table.insert("update_system_settings", decode_update_system_settings);
        table.insert("set_system_active", decode_set_system_active);
        table.insert("get_balance", decode_get_balance);
        table.insert("get_system_active", decode_get_system_active);
        table.insert("get_ngo_status", decode_get_ngo_status);
        table.insert("get_system_status", decode_get_system_status);
        Self { table }
    }

    /// Resolve a named call with raw arguments into a typed request
    pub fn decode(&self, name: &str, args: &[ArgValue]) -> Result<Request, DispatchError> {
        let decoder = self
            .table
            .get(name)
            .ok_or_else(|| DispatchError::UnknownOperation(name.to_string()))?;
        decoder(args)
    }

    /// Whether the table recognizes the name
    pub fn recognizes(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// All recognized names, sorted
    pub fn operation_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

fn expect_len(
    name: &'static str,
    args: &[ArgValue],
    expected: usize,
) -> Result<(), DispatchError> {
    if args.len() != expected {
        return Err(DispatchError::WrongArgumentCount {
            name,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn account_arg(
    name: &'static str,
    args: &[ArgValue],
    index: usize,
) -> Result<AccountId, DispatchError> {
    match args[index] {
        ArgValue::Account(id) => Ok(id),
        _ => Err(DispatchError::WrongArgumentType {
            name,
            index,
            expected: "account",
        }),
    }
}

fn amount_arg(name: &'static str, args: &[ArgValue], index: usize) -> Result<u64, DispatchError> {
    match args[index] {
        ArgValue::Amount(amount) => Ok(amount),
        _ => Err(DispatchError::WrongArgumentType {
            name,
            index,
            expected: "amount",
        }),
    }
}

fn flag_arg(name: &'static str, args: &[ArgValue], index: usize) -> Result<bool, DispatchError> {
    match args[index] {
        ArgValue::Flag(flag) => Ok(flag),
        _ => Err(DispatchError::WrongArgumentType {
            name,
            index,
            expected: "flag",
        }),
    }
}

// ============================================================================
// DECODERS - one per recognized name
// ============================================================================

fn decode_record_deposit(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "record_deposit";
    expect_len(NAME, args, 2)?;
    Ok(Request::Mutate(Operation::RecordDeposit {
        account: account_arg(NAME, args, 0)?,
        amount: amount_arg(NAME, args, 1)?,
    }))
}

fn decode_authorize_ngo(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "authorize_ngo";
    expect_len(NAME, args, 1)?;
    Ok(Request::Mutate(Operation::AuthorizeNgo {
        ngo: account_arg(NAME, args, 0)?,
    }))
}

fn decode_issue_crisis_badge(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "issue_crisis_badge";
    expect_len(NAME, args, 1)?;
    Ok(Request::Mutate(Operation::IssueCrisisBadge {
        beneficiary: account_arg(NAME, args, 0)?,
    }))
}

fn decode_emergency_disbursal(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "emergency_disbursal";
    expect_len(NAME, args, 2)?;
    Ok(Request::Mutate(Operation::EmergencyDisbursal {
        beneficiary: account_arg(NAME, args, 0)?,
        amount: amount_arg(NAME, args, 1)?,
    }))
}

fn decode_transfer_balance(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "transfer_balance";
    expect_len(NAME, args, 3)?;
    Ok(Request::Mutate(Operation::TransferBalance {
        from: account_arg(NAME, args, 0)?,
        to: account_arg(NAME, args, 1)?,
        amount: amount_arg(NAME, args, 2)?,
    }))
}

fn decode_issue_virtual_card(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "issue_virtual_card";
    expect_len(NAME, args, 1)?;
    Ok(Request::Mutate(Operation::IssueVirtualCardMarker {
        account: account_arg(NAME, args, 0)?,
    }))
}

fn decode_update_system_settings(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "update_system_settings";
    expect_len(NAME, args, 2)?;
    Ok(Request::Mutate(Operation::UpdateSystemSettings {
        new_limit: amount_arg(NAME, args, 0)?,
        new_threshold: amount_arg(NAME, args, 1)?,
    }))
}

fn decode_set_system_active(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "set_system_active";
    expect_len(NAME, args, 1)?;
    Ok(Request::Mutate(Operation::SetSystemActive {
        active: flag_arg(NAME, args, 0)?,
    }))
}

fn decode_get_balance(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "get_balance";
    expect_len(NAME, args, 1)?;
    Ok(Request::Query(Query::GetBalance {
        account: account_arg(NAME, args, 0)?,
    }))
}

fn decode_get_system_active(args: &[ArgValue]) -> Result<Request, DispatchError> {
    expect_len("get_system_active", args, 0)?;
    Ok(Request::Query(Query::GetSystemActive))
}

fn decode_get_ngo_status(args: &[ArgValue]) -> Result<Request, DispatchError> {
    const NAME: &str = "get_ngo_status";
    expect_len(NAME, args, 1)?;
    Ok(Request::Query(Query::GetNgoStatus {
        account: account_arg(NAME, args, 0)?,
    }))
}

fn decode_get_system_status(args: &[ArgValue]) -> Result<Request, DispatchError> {
    expect_len("get_system_status", args, 0)?;
    Ok(Request::Query(Query::GetSystemStatus))
}
