//! Mastermind
//!
//! A code-breaking game: guess the hidden sequence of colored pegs before the
//! attempts run out. Each guess is answered with exact and partial match
//! counts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::game::{GameConfig, RoundController, RoundState};
//!
//! let mut controller = RoundController::seeded(GameConfig::default(), 42);
//!
//! let submission = controller.submit_raw("RGBY").unwrap();
//! println!("{}", submission.hint);
//!
//! if submission.state == RoundState::InProgress {
//!     assert_eq!(controller.remaining_attempts(), 5);
//! }
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
