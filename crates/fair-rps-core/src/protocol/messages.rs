//! Round output handed to the presentation layer.

use crate::crypto::{self, Proof, SecretKey};
use crate::protocol::{GameResult, RoundId};
use serde::{Deserialize, Serialize};

/// Everything disclosed when a round resolves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_id: RoundId,
    /// Digest published before the player moved
    pub proof: Proof,
    pub computer_move: String,
    pub player_move: String,
    pub result: GameResult,
    /// Key that opens `proof`
    pub key: SecretKey,
}

impl RoundResult {
    /// Recompute HMAC-SHA256(key, computer_move) and compare with the proof
    pub fn verify(&self) -> bool {
        crypto::verify(&self.key, &self.computer_move, &self.proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::CommitmentEngine;
    use rand::rngs::OsRng;

    fn sample() -> RoundResult {
        let commitment = CommitmentEngine::hmac_sha256().commit(&mut OsRng, "paper");
        let proof = *commitment.proof();
        let (key, computer_move) = commitment.reveal();
        RoundResult {
            round_id: RoundId::new(),
            proof,
            computer_move,
            player_move: "rock".to_string(),
            result: GameResult::ComputerWins,
            key,
        }
    }

    #[test]
    fn test_result_serialization() {
        let result = sample();

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: RoundResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
        assert!(json.contains(&result.proof.to_string()));
        assert!(json.contains(&result.key.to_string()));
    }

    #[test]
    fn test_tampered_result_fails_verification() {
        let mut result = sample();
        assert!(result.verify());

        result.computer_move = "scissors".to_string();
        assert!(!result.verify());
    }
}
