//! Core domain types for Mastermind
//!
//! Palette, peg sequences, and the guess evaluator. Everything here is pure:
//! no randomness, no I/O, no round state.

mod code;
mod error;
mod hint;
mod palette;

pub use code::Code;
pub use error::GameError;
pub use hint::{Hint, Marker, PLACEHOLDER, evaluate};
pub use palette::{DEFAULT_SYMBOLS, Palette};
