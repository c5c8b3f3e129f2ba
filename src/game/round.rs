//! Round lifecycle
//!
//! A `Round` is the whole mutable state of one play-through. The controller
//! swaps in a fresh `Round` on reset instead of patching fields, so the
//! hidden sequence, counter and log always belong together.

use super::{Attempt, AttemptLog, GameConfig, SequenceGenerator};
use crate::core::{Code, GameError, Hint, evaluate};
use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// Won and Lost accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }
}

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub hint: Hint,
    pub state: RoundState,
}

/// One play-through: hidden code, remaining attempts, log and state
#[derive(Clone)]
struct Round {
    hidden: Code,
    remaining_attempts: u32,
    log: AttemptLog,
    state: RoundState,
}

impl Round {
    fn new(hidden: Code, max_attempts: u32) -> Self {
        Self {
            hidden,
            remaining_attempts: max_attempts,
            log: AttemptLog::new(),
            state: RoundState::InProgress,
        }
    }
}

// The hidden code only shows once the round is lost
impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Round");
        match self.state {
            RoundState::Lost => debug.field("hidden", &self.hidden),
            RoundState::InProgress | RoundState::Won => debug.field("hidden", &"<redacted>"),
        };
        debug
            .field("remaining_attempts", &self.remaining_attempts)
            .field("log", &self.log)
            .field("state", &self.state)
            .finish()
    }
}

/// Runs rounds: accepts guesses, scores them and decides the outcome
///
/// Submissions must be serialized by the caller; the controller is a plain
/// `&mut self` state machine.
#[derive(Debug)]
pub struct RoundController<R = StdRng> {
    config: GameConfig,
    generator: SequenceGenerator<R>,
    round: Round,
}

impl RoundController<StdRng> {
    /// Controller with an OS-seeded generator
    #[must_use]
    pub fn from_os_rng(config: GameConfig) -> Self {
        Self::new(config, SequenceGenerator::from_os_rng())
    }

    /// Controller whose hidden sequences replay from `seed`
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SequenceGenerator::seeded(seed))
    }
}

impl<R: Rng> RoundController<R> {
    /// Start the first round
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfig, RoundController, RoundState};
    ///
    /// let controller = RoundController::seeded(GameConfig::default(), 1);
    /// assert_eq!(controller.state(), RoundState::InProgress);
    /// assert_eq!(controller.remaining_attempts(), 6);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig, mut generator: SequenceGenerator<R>) -> Self {
        let round = Self::fresh_round(&config, &mut generator);
        Self {
            config,
            generator,
            round,
        }
    }

    fn fresh_round(config: &GameConfig, generator: &mut SequenceGenerator<R>) -> Round {
        let hidden = generator.draw(config.code_length(), config.palette());
        debug!(
            "New round: {} pegs, {} attempts",
            config.code_length(),
            config.max_attempts()
        );
        Round::new(hidden, config.max_attempts())
    }

    /// Score a guess and advance the round
    ///
    /// A winning guess ends the round without spending an attempt. Any other
    /// guess spends one, and spending the last one loses the round.
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - The round is already won or lost (`RoundAlreadyFinished`)
    /// - The guess has the wrong length (`InvalidGuessShape`)
    /// - The guess holds a symbol outside the palette (`InvalidSymbol`)
    ///
    /// Round state is untouched on error.
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Submission, GameError> {
        if self.round.state.is_terminal() {
            debug!("Rejected guess: round already {}", self.round.state.name());
            return Err(GameError::RoundAlreadyFinished);
        }

        let hint = evaluate(self.config.palette(), &self.round.hidden, guess).inspect_err(|e| {
            debug!("Rejected guess: {e}");
        })?;

        let round = &mut self.round;
        round.log.record(Attempt::new(guess.clone(), hint.clone()));

        if hint.is_solved() {
            round.state = RoundState::Won;
        } else {
            round.remaining_attempts = round.remaining_attempts.saturating_sub(1);
            if round.remaining_attempts == 0 {
                round.state = RoundState::Lost;
            }
        }

        debug!(
            "Guess {} scored {} exact, {} partial; {} attempts left",
            round.log.len(),
            hint.exact_matches(),
            hint.partial_matches(),
            round.remaining_attempts
        );
        if round.state.is_terminal() {
            info!(
                "Round {} after {} guesses",
                round.state.name().to_lowercase(),
                round.log.len()
            );
        }

        Ok(Submission {
            hint,
            state: round.state,
        })
    }

    /// Validate raw player text, then submit it
    ///
    /// # Errors
    /// Same as [`RoundController::submit_guess`], plus parse failures from
    /// [`Code::parse`]. Nothing is recorded on error.
    pub fn submit_raw(&mut self, raw: &str) -> Result<Submission, GameError> {
        if self.round.state.is_terminal() {
            return Err(GameError::RoundAlreadyFinished);
        }
        let guess = Code::parse(raw, self.config.palette(), self.config.code_length())
            .inspect_err(|e| debug!("Rejected input: {e}"))?;
        self.submit_guess(&guess)
    }

    /// Discard the current round, whatever its state, and start a new one
    pub fn reset(&mut self) {
        self.round = Self::fresh_round(&self.config, &mut self.generator);
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.round.state
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.round.remaining_attempts
    }

    /// Guesses of the current round, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        self.round.log.as_slice()
    }

    /// The hidden code, available only once the round is lost
    #[must_use]
    pub const fn reveal_hidden_sequence(&self) -> Option<&Code> {
        match self.round.state {
            RoundState::Lost => Some(&self.round.hidden),
            RoundState::InProgress | RoundState::Won => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn hidden(&self) -> &Code {
        &self.round.hidden
    }
}
