//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_guess};
pub use simple::{SessionSummary, play_session, run_simple};
