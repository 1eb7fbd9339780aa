// Tests for ledger state initialization and the read-only query surface

use reliefledger::identity::AccountId;
use reliefledger::ledger::{
    DepositPolicy, LedgerConfig, LedgerState, Query, QueryResult, DEFAULT_DEPOSIT_LIMIT,
    DEFAULT_EMERGENCY_THRESHOLD,
};

fn creator() -> AccountId {
    AccountId::from_seed(b"test:creator")
}

// ============================================================================
// INITIALIZATION
// ============================================================================

#[test]
fn test_initialize_defaults() {
    let state = LedgerState::initialize(creator(), LedgerConfig::default());
    let global = state.global();

    assert_eq!(global.owner(), &creator());
    assert_eq!(global.admin(), &creator());
    assert!(global.system_active());
    assert_eq!(global.deposit_limit(), DEFAULT_DEPOSIT_LIMIT);
    assert_eq!(global.emergency_threshold(), DEFAULT_EMERGENCY_THRESHOLD);
    assert_eq!(global.ngo_count(), 0);
    assert_eq!(global.crisis_count(), 0);
    assert_eq!(global.token_total(), 0);
    assert_eq!(global.liquidity_pool(), 0);
    assert_eq!(state.account_count(), 0);
}

#[test]
fn test_initialize_custom_config() {
    let bridge = AccountId::from_seed(b"test:bridge");
    let config = LedgerConfig {
        deposit_limit: 42,
        emergency_threshold: 7,
        deposit_policy: DepositPolicy::BridgeOnly(bridge),
    };
    let state = LedgerState::initialize(creator(), config);

    assert_eq!(state.global().deposit_limit(), 42);
    assert_eq!(state.global().emergency_threshold(), 7);
    assert_eq!(state.deposit_policy(), DepositPolicy::BridgeOnly(bridge));
}

// ============================================================================
// QUERIES ON NEVER-SEEN ACCOUNTS
// ============================================================================

#[test]
fn test_queries_return_defaults_for_unseen_accounts() {
    let state = LedgerState::initialize(creator(), LedgerConfig::default());
    let stranger = AccountId::generate();

    assert_eq!(state.balance(&stranger), 0);
    assert!(!state.ngo_status(&stranger));
    assert!(!state.crisis_badge(&stranger));
    assert!(state.account(&stranger).is_none());
}

#[test]
fn test_queries_never_materialize_records() {
    let state = LedgerState::initialize(creator(), LedgerConfig::default());
    let stranger = AccountId::generate();

    state.run_query(&Query::GetBalance { account: stranger });
    state.run_query(&Query::GetNgoStatus { account: stranger });
    state.run_query(&Query::GetSystemActive);
    state.run_query(&Query::GetSystemStatus);

    assert_eq!(state.account_count(), 0);
}

#[test]
fn test_system_status_query() {
    let state = LedgerState::initialize(creator(), LedgerConfig::default());

    match state.run_query(&Query::GetSystemStatus) {
        QueryResult::Status(status) => {
            assert!(status.system_active);
            assert_eq!(status.liquidity_pool, 0);
            assert_eq!(status.token_total, 0);
        }
        other => panic!("unexpected query result: {:?}", other),
    }
}

#[test]
fn test_system_active_query() {
    let state = LedgerState::initialize(creator(), LedgerConfig::default());
    assert_eq!(
        state.run_query(&Query::GetSystemActive),
        QueryResult::Flag(true)
    );
}
