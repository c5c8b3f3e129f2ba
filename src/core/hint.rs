//! Guess evaluation and the feedback it produces
//!
//! A hint reports how many pegs sit on the right spot (exact), how many have
//! the right color on the wrong spot (partial), and a per-position marker
//! row. Markers reveal only exact hits; every other position shows the
//! placeholder, so the player is never told which peg earned a partial.

use super::{Code, GameError, Palette};
use std::fmt;

/// Marker shown for positions without an exact match
pub const PLACEHOLDER: char = '-';

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The guessed symbol sits on its hidden position
    Exact(char),
    /// Anything else, including pegs that earned a partial match
    Blank,
}

impl Marker {
    /// Character used when rendering the marker row
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Exact(symbol) => symbol,
            Self::Blank => PLACEHOLDER,
        }
    }
}

/// Result of evaluating one guess against the hidden sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hint {
    exact_matches: usize,
    partial_matches: usize,
    markers: Vec<Marker>,
}

impl Hint {
    #[inline]
    #[must_use]
    pub const fn exact_matches(&self) -> usize {
        self.exact_matches
    }

    #[inline]
    #[must_use]
    pub const fn partial_matches(&self) -> usize {
        self.partial_matches
    }

    /// One marker per guess position
    #[inline]
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// True when every position matched exactly
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.exact_matches == self.markers.len()
    }

    /// Marker row as a compact string, e.g. `R-G-`
    #[must_use]
    pub fn marker_row(&self) -> String {
        self.markers.iter().map(|m| m.as_char()).collect()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers: Vec<String> = self.markers.iter().map(|m| m.as_char().to_string()).collect();
        write!(
            f,
            "{} exact matches, {} partial matches. Position hints: [{}]",
            self.exact_matches,
            self.partial_matches,
            markers.join(", ")
        )
    }
}

/// Score `guess` against `hidden`
///
/// # Algorithm
/// 1. Exact pass: every position where the symbols agree scores an exact
///    match and consumes that hidden peg.
/// 2. Partial pass: each remaining guess peg, left to right, consumes the
///    first unconsumed hidden peg of the same symbol and scores a partial.
///
/// No symbol is ever credited more often than it occurs in either sequence.
///
/// # Errors
/// Returns `GameError` if:
/// - The sequences differ in length (`InvalidGuessShape`)
/// - A guess symbol is outside `palette` (`InvalidSymbol`)
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Palette, evaluate};
///
/// let palette = Palette::default();
/// let hidden = Code::parse("RRGB", &palette, 4).unwrap();
/// let guess = Code::parse("RGGG", &palette, 4).unwrap();
/// let hint = evaluate(&palette, &hidden, &guess).unwrap();
///
/// assert_eq!(hint.exact_matches(), 2);
/// assert_eq!(hint.partial_matches(), 0);
/// assert_eq!(hint.marker_row(), "R-G-");
/// ```
pub fn evaluate(palette: &Palette, hidden: &Code, guess: &Code) -> Result<Hint, GameError> {
    if guess.len() != hidden.len() {
        return Err(GameError::InvalidGuessShape {
            expected: hidden.len(),
            actual: guess.len(),
        });
    }
    guess.check_palette(palette)?;

    let hidden = hidden.symbols();
    let guess = guess.symbols();
    let mut consumed = vec![false; hidden.len()];
    let mut markers = vec![Marker::Blank; guess.len()];
    let mut exact_matches = 0;
    let mut partial_matches = 0;

    // First pass: exact position matches
    for (i, (&g, &h)) in guess.iter().zip(hidden).enumerate() {
        if g == h {
            exact_matches += 1;
            consumed[i] = true;
            markers[i] = Marker::Exact(g);
        }
    }

    // Second pass: color-only matches against unconsumed hidden pegs
    for (i, &g) in guess.iter().enumerate() {
        if markers[i] != Marker::Blank {
            continue;
        }
        if let Some(j) = (0..hidden.len()).find(|&j| !consumed[j] && hidden[j] == g) {
            consumed[j] = true;
            partial_matches += 1;
        }
    }

    Ok(Hint {
        exact_matches,
        partial_matches,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::from_symbols(text.chars())
    }

    fn score(hidden: &str, guess: &str) -> (usize, usize, String) {
        let hint = evaluate(&Palette::default(), &code(hidden), &code(guess)).unwrap();
        (hint.exact_matches(), hint.partial_matches(), hint.marker_row())
    }

    #[test]
    fn identical_codes_are_solved() {
        let hint = evaluate(&Palette::default(), &code("RGBY"), &code("RGBY")).unwrap();
        assert_eq!(hint.exact_matches(), 4);
        assert_eq!(hint.partial_matches(), 0);
        assert!(hint.is_solved());
        assert_eq!(hint.marker_row(), "RGBY");
    }

    #[test]
    fn disjoint_codes_score_nothing() {
        assert_eq!(score("RRGG", "BYOP"), (0, 0, "----".to_string()));
    }

    #[test]
    fn all_partial_when_permuted() {
        assert_eq!(score("RGBY", "YBGR"), (0, 4, "----".to_string()));
    }

    #[test]
    fn duplicate_guess_symbols_not_overcounted() {
        // Only one G is hidden, so a single G in the guess can score
        assert_eq!(score("RRGB", "RGGG"), (2, 0, "R-G-".to_string()));
        assert_eq!(score("GRRR", "BGGG"), (0, 1, "----".to_string()));
    }

    #[test]
    fn duplicate_hidden_symbols_not_overcounted() {
        // Hidden has two R; guess has one R off position
        assert_eq!(score("RRBB", "GGRG"), (0, 1, "----".to_string()));
    }

    #[test]
    fn exact_match_takes_priority_over_partial() {
        // The B at index 3 is exact; the B at index 0 must not steal it
        assert_eq!(score("RGYB", "BOPB"), (1, 0, "---B".to_string()));
    }

    #[test]
    fn mixed_exact_and_partial() {
        assert_eq!(score("RGBY", "RBGO"), (1, 2, "R---".to_string()));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let result = evaluate(&Palette::default(), &code("RGBY"), &code("RGB"));
        assert_eq!(
            result,
            Err(GameError::InvalidGuessShape {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn out_of_palette_symbol_is_rejected() {
        let result = evaluate(&Palette::default(), &code("RGBY"), &code("RGBW"));
        assert!(matches!(
            result,
            Err(GameError::InvalidSymbol { symbol: 'W', .. })
        ));
    }

    #[test]
    fn display_matches_history_format() {
        let hint = evaluate(&Palette::default(), &code("RRGB"), &code("RGGG")).unwrap();
        assert_eq!(
            hint.to_string(),
            "2 exact matches, 0 partial matches. Position hints: [R, -, G, -]"
        );
    }

    #[test]
    fn marker_chars() {
        assert_eq!(Marker::Exact('R').as_char(), 'R');
        assert_eq!(Marker::Blank.as_char(), PLACEHOLDER);
    }
}
