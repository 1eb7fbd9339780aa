// Account identity - opaque participant identifiers for the relief ledger
//
// The ledger never verifies signatures itself; the surrounding environment
// authenticates callers and hands us an AccountId. This module only defines
// the identifier type and its string form: acct:relief:<base58>

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

const ACCOUNT_PREFIX: &str = "acct:relief:";

/// Errors that can occur when parsing an account identity
#[derive(Error, Debug)]
pub enum AccountIdError {
    #[error("Invalid account format: {0}")]
    InvalidFormat(String),

    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid account length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Unique identifier for a participant account
///
/// 32 opaque bytes, typically derived off-ledger from a public key or
/// wallet address. Two identities are the same account iff the bytes match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Generate a random account ID (useful for tests and demos)
    pub fn generate() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derive a deterministic account ID from arbitrary seed bytes
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"acct:");
        hasher.update(seed);
        let result = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&result);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse an account ID from its string form
    pub fn parse(s: &str) -> Result<Self, AccountIdError> {
        if s.is_empty() {
            return Err(AccountIdError::InvalidFormat(
                "account string cannot be empty".into(),
            ));
        }

        let key_part = s.strip_prefix(ACCOUNT_PREFIX).ok_or_else(|| {
            AccountIdError::InvalidFormat(format!(
                "expected '{}' prefix, got '{}'",
                ACCOUNT_PREFIX, s
            ))
        })?;

        let decoded = bs58::decode(key_part)
            .into_vec()
            .map_err(|e| AccountIdError::InvalidBase58(e.to_string()))?;

        if decoded.len() != 32 {
            return Err(AccountIdError::InvalidLength(decoded.len()));
        }

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Short form for log output (first 8 hex chars)
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ACCOUNT_PREFIX, bs58::encode(&self.0).into_string())
    }
}
