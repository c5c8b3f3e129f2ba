//! Terminal output formatting
//!
//! Display utilities for round events and pretty-printed pegs.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempt, print_prompt, print_remaining, print_round_lost, print_round_won,
    print_score_result, print_welcome,
};
