//! Record of guesses made during a round

use crate::core::{Code, Hint};

/// One accepted guess and the hint it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Code,
    hint: Hint,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Code, hint: Hint) -> Self {
        Self { guess, hint }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn hint(&self) -> &Hint {
        &self.hint
    }

    /// Upper-case text of the guess as submitted
    #[must_use]
    pub fn text(&self) -> String {
        self.guess.to_string()
    }
}

/// Append-only, ordered list of attempts for one round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptLog {
    attempts: Vec<Attempt>,
}

impl AttemptLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attempt> {
        self.attempts.iter()
    }
}

impl<'a> IntoIterator for &'a AttemptLog {
    type Item = &'a Attempt;
    type IntoIter = std::slice::Iter<'a, Attempt>;

    fn into_iter(self) -> Self::IntoIter {
        self.attempts.iter()
    }
}
