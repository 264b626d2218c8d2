//! Keyed digests over moves.

use super::{HexError, SecretKey};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

/// 32-byte keyed digest, shown to the player as 64 hex characters
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof(#[serde(with = "super::hex_bytes")] [u8; 32]);

impl Proof {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Proof {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s.trim().to_ascii_lowercase(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proof({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Source of keyed one-way digests
///
/// Implementations can be:
/// - HmacSha256 for play
/// - deterministic or counting stand-ins for testing
pub trait DigestProvider {
    /// Compute a MAC of `message` under `key`
    fn mac(&self, key: &[u8], message: &[u8]) -> Proof;
}

/// HMAC-SHA256
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl DigestProvider for HmacSha256 {
    fn mac(&self, key: &[u8], message: &[u8]) -> Proof {
        let mut mac =
            <Hmac<Sha256> as Mac>::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(message);
        Proof(mac.finalize().into_bytes().into())
    }
}

impl<D: DigestProvider + ?Sized> DigestProvider for &D {
    fn mac(&self, key: &[u8], message: &[u8]) -> Proof {
        (**self).mac(key, message)
    }
}

/// Check a revealed key and move against the digest shown before play
pub fn verify(key: &SecretKey, chosen_move: &str, proof: &Proof) -> bool {
    HmacSha256.mac(key.to_hex().as_bytes(), chosen_move.as_bytes()) == *proof
}
