// Codec - Binary encoding for call envelopes and committed deltas
//
// Whatever transport or journal the environment chooses, amounts must cross
// it as unsigned integers without precision loss; postcard keeps the
// encoding compact and integer-exact.

use crate::ledger::delta::StateDelta;
use crate::ledger::ops::CallEnvelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Upper bound on accepted input; an envelope or delta is a few hundred
/// bytes at most
const MAX_ENCODED_LEN: usize = 4096;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode: {0}")]
    EncodeError(String),

    #[error("Failed to decode: {0}")]
    DecodeError(String),

    #[error("Encoded input too large: {0} bytes")]
    InputTooLarge(usize),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

/// Codec for the ledger's boundary types
pub struct LedgerCodec;

impl LedgerCodec {
    /// Encode a call envelope to binary bytes
    pub fn encode_call(envelope: &CallEnvelope) -> Result<Vec<u8>, CodecError> {
        Self::encode(envelope)
    }

    /// Decode a call envelope from binary bytes
    pub fn decode_call(bytes: &[u8]) -> Result<CallEnvelope, CodecError> {
        Self::decode(bytes)
    }

    /// Encode a committed delta to binary bytes
    pub fn encode_delta(delta: &StateDelta) -> Result<Vec<u8>, CodecError> {
        Self::encode(delta)
    }

    /// Decode a committed delta from binary bytes
    pub fn decode_delta(bytes: &[u8]) -> Result<StateDelta, CodecError> {
        Self::decode(bytes)
    }

    /// Encode a committed delta to a hex string (for logs and journals)
    pub fn encode_delta_hex(delta: &StateDelta) -> Result<String, CodecError> {
        Ok(hex::encode(Self::encode_delta(delta)?))
    }

    /// Decode a committed delta from a hex string
    pub fn decode_delta_hex(hex_str: &str) -> Result<StateDelta, CodecError> {
        let bytes = hex::decode(hex_str).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
        Self::decode_delta(&bytes)
    }

    fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
        postcard::to_allocvec(value).map_err(|e| CodecError::EncodeError(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
        if bytes.len() > MAX_ENCODED_LEN {
            return Err(CodecError::InputTooLarge(bytes.len()));
        }
        postcard::from_bytes(bytes).map_err(|e| CodecError::DecodeError(e.to_string()))
    }
}
