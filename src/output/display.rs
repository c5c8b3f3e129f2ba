//! Display functions for round events and command results

use super::formatters::{attempts_bar, colored_code, colored_markers, hint_pins};
use crate::commands::ScoreResult;
use crate::game::{Attempt, GameConfig};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title banner and how to play
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_welcome(out: &mut impl Write, config: &GameConfig) -> io::Result<()> {
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║                   Mastermind - Code Breaker                  ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        out,
        "A hidden code of {} colors has been chosen. You have {} attempts.",
        config.code_length(),
        config.max_attempts()
    )?;
    writeln!(
        out,
        "  {} = right color, right spot   {} = right color, wrong spot",
        "●".bright_white(),
        "○".bright_white()
    )?;
    writeln!(out, "Commands: 'new' for a new round, 'quit' to exit\n")
}

/// Prompt line naming the allowed colors
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_prompt(out: &mut impl Write, config: &GameConfig) -> io::Result<()> {
    write!(
        out,
        "Enter your guess ({} colors): {}: ",
        config.code_length(),
        config.palette().listing()
    )?;
    out.flush()
}

/// One history line: `Guess: RGBY -> <hint>`
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_attempt(out: &mut impl Write, turn: usize, attempt: &Attempt) -> io::Result<()> {
    writeln!(
        out,
        "  {}. Guess: {} -> {}",
        turn.to_string().bright_black(),
        colored_code(attempt.guess()),
        attempt.hint()
    )?;
    writeln!(
        out,
        "     {}  {}",
        colored_markers(attempt.hint()),
        hint_pins(attempt.hint())
    )
}

/// Remaining attempts with a bar
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_remaining(out: &mut impl Write, remaining: u32, max: u32) -> io::Result<()> {
    writeln!(
        out,
        "  Attempts left: [{}] {remaining}/{max}\n",
        attempts_bar(remaining, max, max as usize).cyan()
    )
}

/// Victory banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_won(out: &mut impl Write, attempts: &[Attempt]) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "  Congratulations! You guessed the correct code."
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "  Solved in {} {}\n",
        attempts.len().to_string().bright_cyan().bold(),
        if attempts.len() == 1 {
            "guess"
        } else {
            "guesses"
        }
    )
}

/// Loss banner revealing the hidden code
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_lost(out: &mut impl Write, hidden: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).red())?;
    writeln!(
        out,
        "  {} {}",
        "Game over! The secret code was:".red().bold(),
        hidden.bright_white().bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(62).red())
}

/// Print the result of the `score` command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        colored_code(&result.secret),
        colored_code(&result.guess)
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n  Exact:    {}", result.hint.exact_matches().to_string().green().bold());
    println!(
        "  Partial:  {}",
        result.hint.partial_matches().to_string().yellow().bold()
    );
    println!(
        "  Markers:  {}  {}",
        colored_markers(&result.hint),
        hint_pins(&result.hint)
    );
    println!("\n  {}", result.hint);

    if result.hint.is_solved() {
        println!("\n{}", "✅ The guess cracks the code!".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Palette, evaluate};

    fn attempt(hidden: &str, guess: &str) -> Attempt {
        let hidden = Code::from_symbols(hidden.chars());
        let guess = Code::from_symbols(guess.chars());
        let hint = evaluate(&Palette::default(), &hidden, &guess).unwrap();
        Attempt::new(guess, hint)
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn attempt_line_includes_hint_text() {
        let a = attempt("RRGB", "RGGG");
        let text = render(|out| print_attempt(out, 1, &a));
        assert!(text.contains("Guess: "));
        assert!(text.contains("2 exact matches, 0 partial matches. Position hints: [R, -, G, -]"));
        assert!(text.contains("●●··"));
    }

    #[test]
    fn prompt_lists_palette() {
        let text = render(|out| print_prompt(out, &GameConfig::default()));
        assert!(text.contains("Enter your guess (4 colors): R, G, B, Y, O, P"));
    }

    #[test]
    fn lost_banner_reveals_code() {
        let text = render(|out| print_round_lost(out, "RGBY"));
        assert!(text.contains("Game over! The secret code was:"));
        assert!(text.contains("RGBY"));
    }

    #[test]
    fn won_banner_counts_guesses() {
        let attempts = vec![attempt("RGBY", "RRRR"), attempt("RGBY", "RGBY")];
        let text = render(|out| print_round_won(out, &attempts));
        assert!(text.contains("Congratulations! You guessed the correct code."));
        assert!(text.contains("guesses"));
    }
}
