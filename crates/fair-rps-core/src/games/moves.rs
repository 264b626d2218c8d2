//! Validated, ordered move sets.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest playable number of moves
pub const MIN_MOVES: usize = 3;

/// Ordered list of distinct move names with an odd length of at least 3
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(moves: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(ConfigError::TooFewMoves(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(ConfigError::EvenMoveCount(moves.len()));
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self(moves))
    }

    /// Number of moves (always odd, at least 3)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for parity with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move name at a 0-based index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Move name for a 1-based menu number
    pub fn by_menu_number(&self, number: usize) -> Option<&str> {
        number.checked_sub(1).and_then(|index| self.get(index))
    }

    /// 0-based index of a move name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = ConfigError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_move_set() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.get(1), Some("paper"));
        assert_eq!(moves.index_of("scissors"), Some(2));
        assert!(moves.contains("rock"));
        assert!(!moves.contains("spock"));
    }

    #[test]
    fn test_too_few_moves() {
        assert_eq!(
            MoveSet::new(Vec::<String>::new()),
            Err(ConfigError::TooFewMoves(0))
        );
        assert_eq!(MoveSet::new(["rock"]), Err(ConfigError::TooFewMoves(1)));
        assert_eq!(
            MoveSet::new(["rock", "paper"]),
            Err(ConfigError::TooFewMoves(2))
        );
    }

    #[test]
    fn test_even_move_count() {
        assert_eq!(
            MoveSet::new(["rock", "paper", "scissors", "lizard"]),
            Err(ConfigError::EvenMoveCount(4))
        );
    }

    #[test]
    fn test_duplicate_moves_rejected() {
        assert_eq!(
            MoveSet::new(["rock", "paper", "rock"]),
            Err(ConfigError::DuplicateMove("rock".to_string()))
        );
    }

    #[test]
    fn test_menu_numbers_are_one_based() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(moves.by_menu_number(0), None);
        assert_eq!(moves.by_menu_number(1), Some("rock"));
        assert_eq!(moves.by_menu_number(3), Some("scissors"));
        assert_eq!(moves.by_menu_number(4), None);
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: MoveSet = serde_json::from_str(r#"["a","b","c"]"#).unwrap();
        assert_eq!(ok.len(), 3);

        let bad: Result<MoveSet, _> = serde_json::from_str(r#"["a","b"]"#);
        assert!(bad.is_err());
    }
}
