//! Code scoring command
//!
//! Scores one guess against a secret given on the command line.

use crate::core::{Code, GameError, Hint, evaluate};
use crate::game::GameConfig;

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub hint: Hint,
}

/// Validate both codes against `config` and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code has the wrong length or uses a color
/// outside the configured palette.
pub fn score_guess(config: &GameConfig, secret: &str, guess: &str) -> Result<ScoreResult, GameError> {
    let palette = config.palette();
    let secret = Code::parse(secret, palette, config.code_length())?;
    let guess = Code::parse(guess, palette, config.code_length())?;
    let hint = evaluate(palette, &secret, &guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        hint,
    })
}
