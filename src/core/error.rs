//! Errors raised by the game core
//!
//! Every variant is recoverable: the caller reports it and lets the player
//! try again. A rejected guess never touches round state.

use thiserror::Error;

/// Error type for configuration, guess validation and round lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Palette, code length or attempt limit is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Guess length differs from the hidden sequence length
    #[error("Invalid input. Please enter exactly {expected} colors (got {actual}).")]
    InvalidGuessShape { expected: usize, actual: usize },

    /// Guess contains a symbol outside the palette
    #[error("Invalid color '{symbol}' at position {}. Please use only: {allowed}.", .position + 1)]
    InvalidSymbol {
        symbol: char,
        position: usize,
        allowed: String,
    },

    /// Guess submitted after the round was won or lost
    #[error("The round is already finished. Start a new round to keep playing.")]
    RoundAlreadyFinished,
}
