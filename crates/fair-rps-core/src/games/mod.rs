//! Move sets and the cyclic dominance rules.

mod moves;
mod rules;

pub use moves::MoveSet;
pub use rules::{DominanceTable, HelpTable, Outcome, Rules};
