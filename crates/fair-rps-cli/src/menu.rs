//! Menu input parsing.

use std::str::FromStr;
use thiserror::Error;

/// Reserved input that shows the help table
pub const HELP_SENTINEL: &str = "?";

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Help,
    /// 1-based menu number, not yet checked against the move set
    Move(usize),
}

/// Input that is neither a number nor the help sentinel
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no input given")]
    Empty,

    #[error("{0:?} is not a menu number")]
    NotANumber(String),
}

impl FromStr for MenuChoice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(ParseError::Empty),
            HELP_SENTINEL => Ok(MenuChoice::Help),
            _ => match s.parse::<usize>() {
                Ok(0) => Ok(MenuChoice::Exit),
                Ok(n) => Ok(MenuChoice::Move(n)),
                Err(_) => Err(ParseError::NotANumber(s.to_string())),
            },
        }
    }
}
