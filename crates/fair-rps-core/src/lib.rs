//! Fair RPS Core Library
//!
//! This crate provides the rule engine, the commit-reveal primitives and the
//! round state machine for provably fair extended rock-paper-scissors.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, CommitmentEngine, DigestProvider, HmacSha256, Proof, SecretKey};
pub use error::{ConfigError, GameError};
pub use games::{DominanceTable, HelpTable, MoveSet, Outcome, Rules};
pub use protocol::{GameResult, GameSession, RoundId, RoundResult, RoundState};
