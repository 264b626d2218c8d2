//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey, a fresh 256-bit key per round
//! - Proof and the DigestProvider seam (HMAC-SHA256 by default)
//! - Commitment and CommitmentEngine, which bind a move to a key

mod commitment;
mod key;
mod proof;

pub use commitment::{Commitment, CommitmentEngine};
pub use key::SecretKey;
pub use proof::{verify, DigestProvider, HmacSha256, Proof};

use thiserror::Error;

/// Errors parsing hex-encoded keys and proofs
#[derive(Debug, Error)]
pub enum HexError {
    #[error("invalid hex: {0}")]
    Invalid(#[from] hex::FromHexError),
}

/// Serde helpers for 32-byte values stored as hex strings
mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}
