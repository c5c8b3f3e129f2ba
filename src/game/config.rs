//! Game configuration
//!
//! The three knobs of a game: palette, code length and attempt limit.

use crate::core::{GameError, Palette};

/// Pegs per code on the classic board
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Guesses allowed per round on the classic board
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Validated settings shared by every round of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    palette: Palette,
    code_length: usize,
    max_attempts: u32,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `code_length` or
    /// `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    /// use mastermind::game::GameConfig;
    ///
    /// let config = GameConfig::new(Palette::default(), 5, 10).unwrap();
    /// assert_eq!(config.code_length(), 5);
    ///
    /// assert!(GameConfig::new(Palette::default(), 0, 10).is_err());
    /// ```
    pub fn new(palette: Palette, code_length: usize, max_attempts: u32) -> Result<Self, GameError> {
        if code_length == 0 {
            return Err(GameError::InvalidConfiguration(
                "code length must be at least 1".to_string(),
            ));
        }
        if max_attempts == 0 {
            return Err(GameError::InvalidConfiguration(
                "at least one attempt must be allowed".to_string(),
            ));
        }

        Ok(Self {
            palette,
            code_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
