//! Peg sequence representation
//!
//! A `Code` is an ordered row of palette symbols. The hidden sequence and
//! every guess share this shape; repeats are allowed.

use super::{GameError, Palette};
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered sequence of peg symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Vec<char>,
}

impl Code {
    /// Validate raw player input against a palette and code length
    ///
    /// Input is trimmed and upper-cased first. Length is checked before the
    /// alphabet, so `"RG"` reports a shape error even if it also holds
    /// unknown colors.
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - The number of characters differs from `length` (`InvalidGuessShape`)
    /// - A character is not in the palette (`InvalidSymbol`)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Palette};
    ///
    /// let palette = Palette::default();
    /// let code = Code::parse("rgby", &palette, 4).unwrap();
    /// assert_eq!(code.to_string(), "RGBY");
    ///
    /// assert!(Code::parse("RGB", &palette, 4).is_err());
    /// assert!(Code::parse("RGBX", &palette, 4).is_err());
    /// ```
    pub fn parse(raw: &str, palette: &Palette, length: usize) -> Result<Self, GameError> {
        let symbols: Vec<char> = raw.trim().chars().map(|c| c.to_ascii_uppercase()).collect();

        if symbols.len() != length {
            return Err(GameError::InvalidGuessShape {
                expected: length,
                actual: symbols.len(),
            });
        }

        let code = Self { symbols };
        code.check_palette(palette)?;
        Ok(code)
    }

    /// Wrap symbols without validation
    ///
    /// Evaluation still rejects symbols outside the palette, so an unchecked
    /// code can never score.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Fail on the first symbol that is not a palette member
    ///
    /// # Errors
    /// Returns `GameError::InvalidSymbol` naming the offending position.
    pub fn check_palette(&self, palette: &Palette) -> Result<(), GameError> {
        match self
            .symbols
            .iter()
            .enumerate()
            .find(|&(_, &symbol)| !palette.contains(symbol))
        {
            Some((position, &symbol)) => Err(GameError::InvalidSymbol {
                symbol,
                position,
                allowed: palette.listing(),
            }),
            None => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Occurrences of each symbol
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
