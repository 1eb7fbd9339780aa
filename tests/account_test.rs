// Tests for account identity parsing, derivation, and display

use reliefledger::identity::{AccountId, AccountIdError};

#[test]
fn test_generate_is_unique() {
    let a = AccountId::generate();
    let b = AccountId::generate();
    assert_ne!(a, b);
}

#[test]
fn test_from_seed_is_deterministic() {
    let a = AccountId::from_seed(b"ngo:redcross");
    let b = AccountId::from_seed(b"ngo:redcross");
    assert_eq!(a, b);
}

#[test]
fn test_from_seed_differs_by_seed() {
    let a = AccountId::from_seed(b"ngo:redcross");
    let b = AccountId::from_seed(b"ngo:unicef");
    assert_ne!(a, b);
}

#[test]
fn test_display_parse_round_trip() {
    let account = AccountId::generate();
    let s = account.to_string();
    assert!(s.starts_with("acct:relief:"));

    let parsed = AccountId::parse(&s).unwrap();
    assert_eq!(parsed, account);
}

#[test]
fn test_from_bytes_round_trip() {
    let bytes = [7u8; 32];
    let account = AccountId::from_bytes(bytes);
    assert_eq!(account.as_bytes(), &bytes);
}

#[test]
fn test_parse_rejects_empty() {
    let result = AccountId::parse("");
    assert!(matches!(result, Err(AccountIdError::InvalidFormat(_))));
}

#[test]
fn test_parse_rejects_wrong_prefix() {
    let result = AccountId::parse("wallet:relief:3vQB7B6MrGQZaxCuFg4oh");
    assert!(matches!(result, Err(AccountIdError::InvalidFormat(_))));
}

#[test]
fn test_parse_rejects_bad_base58() {
    // '0', 'O', 'I', 'l' are not in the base58 alphabet
    let result = AccountId::parse("acct:relief:0OIl");
    assert!(matches!(result, Err(AccountIdError::InvalidBase58(_))));
}

#[test]
fn test_parse_rejects_wrong_length() {
    // Truncating the base58 part still decodes, but to fewer than 32 bytes
    let s = AccountId::from_bytes([9u8; 32]).to_string();
    let truncated = &s[..s.len() - 10];
    let result = AccountId::parse(truncated);
    assert!(matches!(result, Err(AccountIdError::InvalidLength(_))));
}

#[test]
fn test_short_form_is_stable() {
    let account = AccountId::from_bytes([0xab; 32]);
    assert_eq!(account.short(), "abababab");
}
