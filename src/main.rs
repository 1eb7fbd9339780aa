// relief - CLI for exercising the crisis-relief disbursement ledger
//
// The real system drives the ledger from a payment bridge and NGO tooling;
// this binary exists to run the end-to-end flow locally and to mint demo
// account identities.

use clap::{Parser, Subcommand};
use reliefledger::dispatch::{ArgValue, Dispatcher, Request};
use reliefledger::identity::AccountId;
use reliefledger::ledger::{CallEnvelope, LedgerCodec, LedgerConfig, Query, QueryResult};
use reliefledger::service::LedgerService;
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "relief", about = "Crisis-relief disbursement ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full deposit -> authorize -> badge -> disburse -> transfer flow
    Demo,
    /// Generate an account identity (random, or derived from a seed string)
    NewAccount {
        /// Derive deterministically from this seed instead of random bytes
        #[arg(long)]
        seed: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match Cli::parse().command {
        Command::Demo => run_demo(),
        Command::NewAccount { seed } => {
            let account = match seed {
                Some(seed) => AccountId::from_seed(seed.as_bytes()),
                None => AccountId::generate(),
            };
            println!("{}", account);
            Ok(())
        }
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let admin = AccountId::from_seed(b"demo:admin");
    let bridge = AccountId::from_seed(b"demo:bridge");
    let ngo = AccountId::from_seed(b"demo:ngo");
    let alice = AccountId::from_seed(b"demo:alice");
    let bob = AccountId::from_seed(b"demo:bob");

    let dispatcher = Dispatcher::new();
    let service = LedgerService::new(admin, LedgerConfig::default());
    let mut seq = 0u64;

    let calls: [(&str, AccountId, Vec<ArgValue>); 6] = [
        (
            "record_deposit",
            bridge,
            vec![ArgValue::Account(alice), ArgValue::Amount(100_000)],
        ),
        (
            "record_deposit",
            bridge,
            vec![ArgValue::Account(alice), ArgValue::Amount(50_000)],
        ),
        ("authorize_ngo", admin, vec![ArgValue::Account(ngo)]),
        ("issue_crisis_badge", ngo, vec![ArgValue::Account(bob)]),
        (
            "emergency_disbursal",
            ngo,
            vec![ArgValue::Account(bob), ArgValue::Amount(75_000)],
        ),
        (
            "transfer_balance",
            bob,
            vec![
                ArgValue::Account(bob),
                ArgValue::Account(alice),
                ArgValue::Amount(25_000),
            ],
        ),
    ];

    for (name, caller, args) in calls {
        let Request::Mutate(operation) = dispatcher.decode(name, &args)? else {
            continue;
        };
        seq += 1;
        let delta = service.execute(&CallEnvelope {
            caller,
            seq,
            operation,
        })?;
        println!(
            "#{:<2} {:<24} delta {}",
            delta.seq,
            delta.operation_name(),
            LedgerCodec::encode_delta_hex(&delta)?
        );
    }

    for (label, account) in [("alice", alice), ("bob", bob)] {
        if let QueryResult::Amount(balance) = service.query(&Query::GetBalance { account }) {
            println!("balance[{}] = {}", label, balance);
        }
    }
    if let QueryResult::Status(status) = service.query(&Query::GetSystemStatus) {
        println!(
            "system: active={} pool={} token_total={}",
            status.system_active, status.liquidity_pool, status.token_total
        );
    }

    Ok(())
}
