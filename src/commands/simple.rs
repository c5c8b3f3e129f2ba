//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::game::{RoundController, RoundState};
use crate::output::{
    print_attempt, print_prompt, print_remaining, print_round_lost, print_round_won,
    print_welcome,
};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Rounds finished during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: usize,
    pub lost: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple<G: Rng>(controller: &mut RoundController<G>) -> Result<SessionSummary> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_session(controller, &mut stdin.lock(), &mut stdout)
}

/// Play rounds reading commands from `input` until quit or end of input
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_session<G, I, O>(
    controller: &mut RoundController<G>,
    input: &mut I,
    out: &mut O,
) -> Result<SessionSummary>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();
    print_welcome(out, controller.config())?;

    loop {
        print_prompt(out, controller.config())?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(summary);
        };

        // A line that parses as a guess is always played, even if it spells a command
        let submission = match controller.submit_raw(&line) {
            Ok(submission) => submission,
            Err(e) => {
                match line.to_lowercase().as_str() {
                    "quit" | "exit" => {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(summary);
                    }
                    "new" => {
                        controller.reset();
                        writeln!(out, "\n🔄 New round started!\n")?;
                    }
                    _ => writeln!(out, "{}\n", format!("❌ {e}").red())?,
                }
                continue;
            }
        };

        let attempts = controller.attempts();
        if let Some(attempt) = attempts.last() {
            print_attempt(out, attempts.len(), attempt)?;
        }

        match submission.state {
            RoundState::InProgress => {
                let max = controller.config().max_attempts();
                print_remaining(out, controller.remaining_attempts(), max)?;
                continue;
            }
            RoundState::Won => {
                summary.won += 1;
                print_round_won(out, controller.attempts())?;
            }
            RoundState::Lost => {
                summary.lost += 1;
                let hidden = controller
                    .reveal_hidden_sequence()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                print_round_lost(out, &hidden)?;
            }
        }

        write!(out, "Play again? (yes/no): ")?;
        out.flush()?;
        match read_line(input)?.map(|answer| answer.to_lowercase()).as_deref() {
            Some("yes" | "y") => {
                controller.reset();
                writeln!(out, "\n🔄 New round started!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(summary);
            }
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
