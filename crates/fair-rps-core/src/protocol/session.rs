//! One round of play: commit, publish, accept a move, reveal.

use crate::crypto::{Commitment, CommitmentEngine, DigestProvider, HmacSha256, Proof};
use crate::error::GameError;
use crate::games::{HelpTable, MoveSet, Rules};
use crate::protocol::{GameResult, RoundId, RoundResult, RoundState};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use tracing::debug;

/// Single-use round between the player and the computer.
///
/// The computer's move and its proof are fixed in the constructor. The proof
/// must be taken with [`GameSession::publish_commitment`] before
/// [`GameSession::play`] accepts a move, so the player always sees the
/// commitment first.
#[derive(Debug)]
pub struct GameSession {
    id: RoundId,
    rules: Rules,
    computer_index: usize,
    proof: Proof,
    /// Taken on resolution
    commitment: Option<Commitment>,
    state: RoundState,
    result: Option<RoundResult>,
}

impl GameSession {
    /// Start a round with OS randomness for the key, the thread RNG for the
    /// move draw and HMAC-SHA256 for the proof
    pub fn new(moves: MoveSet) -> Self {
        Self::with_sources(moves, &mut OsRng, &mut rand::thread_rng(), HmacSha256)
    }

    /// Validate raw move names, then start a round
    pub fn from_names<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves = MoveSet::new(names)?;
        Ok(Self::new(moves))
    }

    /// Start a round with injected sources.
    ///
    /// `key_rng` must be cryptographically secure. `move_rng` only has to be
    /// drawn now, before the proof is computed.
    pub fn with_sources<K, M, D>(
        moves: MoveSet,
        key_rng: &mut K,
        move_rng: &mut M,
        digest: D,
    ) -> Self
    where
        K: RngCore + CryptoRng,
        M: Rng,
        D: DigestProvider,
    {
        let id = RoundId::new();
        let rules = Rules::new(moves);
        let engine = CommitmentEngine::new(digest);

        let key = engine.generate_key(key_rng);
        let computer_index = move_rng.gen_range(0..rules.moves().len());
        let computer_move = rules
            .moves()
            .get(computer_index)
            .unwrap_or_default()
            .to_string();
        let commitment = engine.seal(key, computer_move);
        let proof = *commitment.proof();

        debug!(round = %id, moves = rules.moves().len(), %proof, "round committed");

        Self {
            id,
            rules,
            computer_index,
            proof,
            commitment: Some(commitment),
            state: RoundState::Initialized,
            result: None,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn moves(&self) -> &MoveSet {
        self.rules.moves()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Numbered menu entries, starting at 1
    pub fn menu(&self) -> impl Iterator<Item = (usize, &str)> {
        self.rules.moves().iter().enumerate().map(|(i, m)| (i + 1, m))
    }

    pub fn help_table(&self) -> HelpTable {
        self.rules.as_table()
    }

    pub fn is_valid_move(&self, name: &str) -> bool {
        self.rules.moves().contains(name)
    }

    /// Hand out the proof for display and start accepting moves
    pub fn publish_commitment(&mut self) -> Proof {
        if self.state == RoundState::Initialized {
            self.state = RoundState::AwaitingPlayerMove;
            debug!(round = %self.id, "commitment published");
        }
        self.proof
    }

    /// Result of a resolved round
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Record the player's move, resolve the round and disclose the key.
    ///
    /// An unknown move leaves the session untouched so the caller can ask
    /// again.
    pub fn play(&mut self, player_move: &str) -> Result<RoundResult, GameError> {
        match self.state {
            RoundState::Initialized => return Err(GameError::CommitmentNotPublished),
            RoundState::Resolved => return Err(GameError::AlreadyResolved),
            RoundState::AwaitingPlayerMove => {}
        }

        let Some(player_index) = self.rules.moves().index_of(player_move) else {
            debug!(round = %self.id, input = player_move, "rejected unknown move");
            return Err(GameError::UnknownMove(player_move.to_string()));
        };

        let commitment = self.commitment.take().ok_or(GameError::AlreadyResolved)?;
        let (key, computer_move) = commitment.reveal();
        let outcome = self.rules.outcome_at(player_index, self.computer_index);

        let result = RoundResult {
            round_id: self.id,
            proof: self.proof,
            computer_move,
            player_move: player_move.to_string(),
            result: GameResult::from_player_outcome(outcome),
            key,
        };

        self.state = RoundState::Resolved;
        self.result = Some(result.clone());
        debug!(
            round = %self.id,
            player = %result.player_move,
            computer = %result.computer_move,
            result = ?result.result,
            "round resolved"
        );

        Ok(result)
    }

    /// Play by 1-based menu number
    pub fn play_menu_number(&mut self, number: usize) -> Result<RoundResult, GameError> {
        let name = self
            .rules
            .moves()
            .by_menu_number(number)
            .ok_or_else(|| GameError::UnknownMove(number.to_string()))?
            .to_string();
        self.play(&name)
    }
}
