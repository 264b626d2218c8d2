//! Front end error type.

use fair_rps_core::crypto::HexError;
use fair_rps_core::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("bad hex value: {0}")]
    Hex(#[from] HexError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode result: {0}")]
    Json(#[from] serde_json::Error),
}
