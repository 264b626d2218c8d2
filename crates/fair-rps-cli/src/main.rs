//! Fair RPS terminal game
//!
//! Plays extended rock-paper-scissors against the computer. The computer's
//! HMAC is printed before you choose; the key is printed afterwards so you
//! can check the computer did not change its move.

mod error;
mod game;
mod menu;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use fair_rps_core::{crypto, GameError, GameSession, MoveSet, Proof, SecretKey};
use game::{Output, RoundEnd};
use std::io;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "fair-rps rock paper scissors lizard spock";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Provably fair rock-paper-scissors with any odd number of moves",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Args)]
struct PlayArgs {
    /// Move names in cyclic order (odd count, at least 3, all distinct)
    moves: Vec<String>,

    /// Number of rounds, each with a fresh key and move
    #[arg(long, env = "FAIR_RPS_ROUNDS", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Print each round result as one JSON line
    #[arg(long, env = "FAIR_RPS_JSON")]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check a revealed key and move against the HMAC shown before play
    Verify {
        /// Key printed after the round
        #[arg(long)]
        key: String,
        /// Computer move printed after the round
        #[arg(long = "move")]
        computer_move: String,
        /// HMAC printed before the round
        #[arg(long)]
        hmac: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing; stdout belongs to the game
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let outcome = match cli.command {
        Some(Command::Verify {
            key,
            computer_move,
            hmac,
        }) => verify(&key, &computer_move, &hmac).map(|valid| {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
        None => play(cli.play),
    };

    match outcome {
        Ok(code) => code,
        Err(CliError::Game(GameError::Config(err))) => {
            eprintln!("Invalid moves: {err}. Please provide an odd number (at least 3) of unique moves.");
            eprintln!("Example: {USAGE_EXAMPLE}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(args: PlayArgs) -> Result<ExitCode, CliError> {
    // Validate before any key is drawn
    let moves = MoveSet::new(args.moves).map_err(GameError::from)?;
    let output = if args.json { Output::Json } else { Output::Text };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for round in 1..=args.rounds {
        let mut session = GameSession::new(moves.clone());
        info!(round = %session.id(), number = round, of = args.rounds, "starting round");

        match game::play_round(&mut session, &mut input, &mut out, output)? {
            RoundEnd::Resolved(_) => {}
            RoundEnd::Exit => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn verify(key: &str, computer_move: &str, hmac: &str) -> Result<bool, CliError> {
    let key: SecretKey = key.parse()?;
    let proof: Proof = hmac.parse()?;

    let valid = crypto::verify(&key, computer_move, &proof);
    if valid {
        println!("valid");
    } else {
        warn!(%proof, computer_move, "HMAC does not match");
        println!("INVALID");
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use fair_rps_core::CommitmentEngine;
    use rand::rngs::OsRng;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_moves_and_rounds() {
        let cli = Cli::try_parse_from(["fair-rps", "--rounds", "3", "rock", "paper", "scissors"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.play.moves, vec!["rock", "paper", "scissors"]);
        assert_eq!(cli.play.rounds, 3);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(Cli::try_parse_from(["fair-rps", "--rounds", "0", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_invalid_move_count_is_config_error() {
        let args = PlayArgs {
            moves: vec!["rock".into(), "paper".into()],
            rounds: 1,
            json: false,
        };
        assert!(matches!(
            play(args),
            Err(CliError::Game(GameError::Config(_)))
        ));
    }

    #[test]
    fn test_verify_command() {
        let commitment = CommitmentEngine::hmac_sha256().commit(&mut OsRng, "lizard");
        let proof = commitment.proof().to_string();
        let (key, _) = commitment.reveal();
        let key = key.to_string();

        assert!(verify(&key, "lizard", &proof).unwrap());
        assert!(!verify(&key, "spock", &proof).unwrap());
        assert!(matches!(
            verify("nothex", "lizard", &proof),
            Err(CliError::Hex(_))
        ));
    }
}
