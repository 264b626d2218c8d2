//! Interactive round loop over any line reader and writer.

use crate::error::CliError;
use crate::menu::{MenuChoice, HELP_SENTINEL};
use fair_rps_core::{GameError, GameSession, RoundResult};
use std::io::{BufRead, Write};
use tracing::debug;

/// How a round ended
#[derive(Debug)]
pub enum RoundEnd {
    Resolved(RoundResult),
    Exit,
}

/// Output format for resolved rounds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

/// Publish the commitment, then prompt until the player picks a move or
/// leaves. Bad input re-prompts without touching the session.
pub fn play_round<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
    output: Output,
) -> Result<RoundEnd, CliError> {
    let proof = session.publish_commitment();
    writeln!(out, "HMAC: {proof}")?;
    write_menu(session, out)?;

    loop {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!(round = %session.id(), "input closed");
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            return Ok(RoundEnd::Exit);
        }

        let number = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                writeln!(out, "Goodbye!")?;
                return Ok(RoundEnd::Exit);
            }
            Ok(MenuChoice::Help) => {
                writeln!(out, "Help Table (result for the row's move):")?;
                write!(out, "{}", session.help_table())?;
                continue;
            }
            Ok(MenuChoice::Move(number)) => number,
            Err(err) => {
                debug!(round = %session.id(), %err, "unparsable input");
                write_invalid(session, out)?;
                continue;
            }
        };

        match session.play_menu_number(number) {
            Ok(result) => {
                write_result(&result, out, output)?;
                return Ok(RoundEnd::Resolved(result));
            }
            Err(GameError::UnknownMove(_)) => write_invalid(session, out)?,
            Err(err) => return Err(err.into()),
        }
    }
}

fn write_menu<W: Write>(session: &GameSession, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "Available moves:")?;
    for (number, name) in session.menu() {
        writeln!(out, "{number} - {name}")?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "{HELP_SENTINEL} - help")?;
    Ok(())
}

fn write_invalid<W: Write>(session: &GameSession, out: &mut W) -> Result<(), CliError> {
    writeln!(
        out,
        "Invalid move. Please enter a number between 1 and {} or type '{HELP_SENTINEL}' for help.",
        session.moves().len()
    )?;
    write_menu(session, out)
}

fn write_result<W: Write>(result: &RoundResult, out: &mut W, output: Output) -> Result<(), CliError> {
    match output {
        Output::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
        Output::Text => {
            writeln!(out, "HMAC: {}", result.proof)?;
            writeln!(out, "Computer move: {}", result.computer_move)?;
            writeln!(out, "Your move: {}", result.player_move)?;
            writeln!(out, "{}", result.result)?;
            writeln!(out, "Key: {}", result.key)?;
        }
    }
    Ok(())
}
