//! Palette of symbols a code may use
//!
//! Symbols are single upper-case characters, one per peg color.

use super::GameError;
use super::hint::PLACEHOLDER;
use rustc_hash::FxHashSet;
use std::fmt;

/// Colors of the classic board: red, green, blue, yellow, orange, purple
pub const DEFAULT_SYMBOLS: [char; 6] = ['R', 'G', 'B', 'Y', 'O', 'P'];

/// An ordered set of distinct peg symbols
///
/// Invariants: at least two symbols, no duplicates, no whitespace and never
/// the hint placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    symbols: Vec<char>,
}

impl Palette {
    /// Build a palette, normalizing symbols to upper case
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if:
    /// - Fewer than two symbols are given
    /// - A symbol repeats (case-insensitively)
    /// - A symbol is whitespace or the `-` placeholder
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::new(['r', 'g', 'b']).unwrap();
    /// assert!(palette.contains('R'));
    ///
    /// assert!(Palette::new(['R', 'r']).is_err());
    /// ```
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        let mut normalized = Vec::new();

        for symbol in symbols {
            let symbol = symbol.to_ascii_uppercase();
            if symbol.is_whitespace() || symbol == PLACEHOLDER {
                return Err(GameError::InvalidConfiguration(format!(
                    "'{symbol}' cannot be used as a color"
                )));
            }
            if !seen.insert(symbol) {
                return Err(GameError::InvalidConfiguration(format!(
                    "color '{symbol}' appears more than once"
                )));
            }
            normalized.push(symbol);
        }

        if normalized.len() < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "a palette needs at least 2 colors, got {}",
                normalized.len()
            )));
        }

        Ok(Self {
            symbols: normalized,
        })
    }

    /// Build a palette from a string such as `"RGBYOP"`
    ///
    /// # Errors
    /// Same conditions as [`Palette::new`].
    pub fn parse(text: &str) -> Result<Self, GameError> {
        Self::new(text.trim().chars())
    }

    /// Symbols in their configured order
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

    /// Never true for a palette built through `new`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Membership test used by guess validation
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Comma separated listing, e.g. `R, G, B, Y, O, P`
    #[must_use]
    pub fn listing(&self) -> String {
        self.symbols
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_vec(),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_six_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.symbols(), &DEFAULT_SYMBOLS);
        assert_eq!(palette.to_string(), "RGBYOP");
    }

    #[test]
    fn palette_normalizes_case() {
        let palette = Palette::parse("rgb").unwrap();
        assert_eq!(palette.symbols(), &['R', 'G', 'B']);
        assert!(palette.contains('G'));
        assert!(!palette.contains('g'));
    }

    #[test]
    fn palette_rejects_duplicates() {
        assert!(matches!(
            Palette::parse("RGR"),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(Palette::parse("Rr").is_err());
    }

    #[test]
    fn palette_rejects_too_few_symbols() {
        assert!(Palette::parse("").is_err());
        assert!(Palette::parse("R").is_err());
        assert!(Palette::parse("RG").is_ok());
    }

    #[test]
    fn palette_rejects_placeholder_and_whitespace() {
        assert!(Palette::parse("RG-").is_err());
        assert!(Palette::new(['R', ' ', 'G']).is_err());
    }

    #[test]
    fn palette_listing() {
        assert_eq!(Palette::default().listing(), "R, G, B, Y, O, P");
    }
}
