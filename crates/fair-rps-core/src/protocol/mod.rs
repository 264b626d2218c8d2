//! Round types, results and the game session state machine.

mod messages;
mod session;
mod types;

pub use messages::RoundResult;
pub use session::GameSession;
pub use types::{GameResult, RoundId, RoundState};
