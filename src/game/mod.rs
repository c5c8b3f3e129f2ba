//! Round orchestration
//!
//! Configuration, hidden sequence generation, the attempt log and the round
//! state machine built on top of the pure core.

mod attempt;
mod config;
mod generator;
mod round;

pub use attempt::{Attempt, AttemptLog};
pub use config::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use generator::SequenceGenerator;
pub use round::{RoundController, RoundState, Submission};
