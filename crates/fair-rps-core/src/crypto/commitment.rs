//! Commitment and CommitmentEngine for the commit-reveal round.

use super::{DigestProvider, HmacSha256, Proof, SecretKey};
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Commitment = HMAC(key, move), held together with its opening
#[derive(Clone)]
pub struct Commitment {
    key: SecretKey,
    chosen_move: String,
    proof: Proof,
}

impl Commitment {
    /// The digest that may be shown before the counterparty acts
    pub fn proof(&self) -> &Proof {
        &self.proof
    }

    /// Give up secrecy: returns the key and the committed move
    pub fn reveal(self) -> (SecretKey, String) {
        (self.key, self.chosen_move)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.proof.as_bytes()[..8]))
    }
}

/// Produces and checks move commitments
#[derive(Clone, Debug, Default)]
pub struct CommitmentEngine<D = HmacSha256> {
    digest: D,
}

impl CommitmentEngine<HmacSha256> {
    pub fn hmac_sha256() -> Self {
        Self::new(HmacSha256)
    }
}

impl<D: DigestProvider> CommitmentEngine<D> {
    pub fn new(digest: D) -> Self {
        Self { digest }
    }

    /// Fresh 256-bit key. The `CryptoRng` bound keeps general-purpose
    /// generators out.
    pub fn generate_key<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> SecretKey {
        SecretKey::generate(rng)
    }

    /// Digest of `chosen_move` under `key`. The key's hex text is the MAC key,
    /// so the player can check it with any HMAC-SHA256 tool.
    pub fn proof(&self, key: &SecretKey, chosen_move: &str) -> Proof {
        self.digest.mac(key.to_hex().as_bytes(), chosen_move.as_bytes())
    }

    /// Bind `chosen_move` to an existing key
    pub fn seal(&self, key: SecretKey, chosen_move: impl Into<String>) -> Commitment {
        let chosen_move = chosen_move.into();
        let proof = self.proof(&key, &chosen_move);
        Commitment {
            key,
            chosen_move,
            proof,
        }
    }

    /// Generate a key and bind `chosen_move` to it
    pub fn commit<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        chosen_move: impl Into<String>,
    ) -> Commitment {
        let key = self.generate_key(rng);
        self.seal(key, chosen_move)
    }

    /// Verify that the given key and move produce this proof
    pub fn verify(&self, key: &SecretKey, chosen_move: &str, proof: &Proof) -> bool {
        self.proof(key, chosen_move) == *proof
    }
}
