// Tests for the boundary codec: call envelopes and committed deltas

use reliefledger::identity::AccountId;
use reliefledger::ledger::{CallEnvelope, CodecError, LedgerCodec, Operation, StateChange, StateDelta};

#[test]
fn test_call_envelope_round_trip() {
    let envelope = CallEnvelope {
        caller: AccountId::from_seed(b"test:bridge"),
        seq: 17,
        operation: Operation::TransferBalance {
            from: AccountId::from_seed(b"test:alice"),
            to: AccountId::from_seed(b"test:bob"),
            amount: u64::MAX, // amounts must survive encoding without loss
        },
    };

    let bytes = LedgerCodec::encode_call(&envelope).unwrap();
    let decoded = LedgerCodec::decode_call(&bytes).unwrap();
    assert_eq!(decoded, envelope);
}

#[test]
fn test_delta_hex_round_trip() {
    let delta = StateDelta {
        seq: 3,
        caller: AccountId::from_seed(b"test:ngo"),
        change: StateChange::EmergencyDisbursed {
            beneficiary: AccountId::from_seed(b"test:bob"),
            amount: 400_000,
            new_balance: 400_000,
            liquidity_pool: 600_000,
        },
    };

    let hex_str = LedgerCodec::encode_delta_hex(&delta).unwrap();
    let decoded = LedgerCodec::decode_delta_hex(&hex_str).unwrap();
    assert_eq!(decoded, delta);
}

#[test]
fn test_decode_rejects_garbage() {
    let result = LedgerCodec::decode_delta(&[0xff; 64]);
    assert!(matches!(result, Err(CodecError::DecodeError(_))));
}

#[test]
fn test_decode_rejects_oversized_input() {
    let blob = vec![0u8; 8192];
    let result = LedgerCodec::decode_call(&blob);
    assert!(matches!(result, Err(CodecError::InputTooLarge(8192))));
}

#[test]
fn test_decode_rejects_bad_hex() {
    let result = LedgerCodec::decode_delta_hex("not-hex");
    assert!(matches!(result, Err(CodecError::InvalidHex(_))));
}
