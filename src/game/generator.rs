//! Hidden sequence generation
//!
//! The random source is injected so games can be replayed from a seed.

use crate::core::{Code, GameError, Palette};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws hidden sequences uniformly from a palette, with replacement
#[derive(Debug, Clone)]
pub struct SequenceGenerator<R = StdRng> {
    rng: R,
}

impl SequenceGenerator<StdRng> {
    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator for replays and tests
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SequenceGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a code of `length` symbols from `palette`
    ///
    /// Each position is chosen independently, so repeats are allowed.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `length` is zero or the
    /// palette is empty.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    /// use mastermind::game::SequenceGenerator;
    ///
    /// let palette = Palette::default();
    /// let mut generator = SequenceGenerator::seeded(7);
    /// let code = generator.generate(4, &palette).unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert!(code.symbols().iter().all(|&s| palette.contains(s)));
    /// ```
    pub fn generate(&mut self, length: usize, palette: &Palette) -> Result<Code, GameError> {
        if length == 0 {
            return Err(GameError::InvalidConfiguration(
                "cannot generate an empty code".to_string(),
            ));
        }
        if palette.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "cannot generate a code from an empty palette".to_string(),
            ));
        }
        Ok(self.draw(length, palette))
    }

    /// Infallible draw for callers holding a validated configuration
    pub(crate) fn draw(&mut self, length: usize, palette: &Palette) -> Code {
        let symbols = palette.symbols();
        Code::from_symbols((0..length).map(|_| symbols[self.rng.random_range(0..symbols.len())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length_from_palette() {
        let palette = Palette::default();
        let mut generator = SequenceGenerator::seeded(1);

        for length in 1..=8 {
            let code = generator.generate(length, &palette).unwrap();
            assert_eq!(code.len(), length);
            assert!(code.check_palette(&palette).is_ok());
        }
    }

    #[test]
    fn same_seed_same_codes() {
        let palette = Palette::default();
        let mut a = SequenceGenerator::seeded(42);
        let mut b = SequenceGenerator::seeded(42);

        for _ in 0..10 {
            assert_eq!(
                a.generate(4, &palette).unwrap(),
                b.generate(4, &palette).unwrap()
            );
        }
    }

    #[test]
    fn repeated_calls_vary() {
        let palette = Palette::default();
        let mut generator = SequenceGenerator::seeded(3);
        let first = generator.generate(6, &palette).unwrap();

        // 6^6 possible codes; twenty identical draws in a row would be absurd
        let all_same = (0..20).all(|_| generator.generate(6, &palette).unwrap() == first);
        assert!(!all_same);
    }

    #[test]
    fn every_symbol_eventually_drawn() {
        let palette = Palette::default();
        let mut generator = SequenceGenerator::seeded(9);
        let mut seen = rustc_hash::FxHashSet::default();

        for _ in 0..100 {
            seen.extend(generator.generate(4, &palette).unwrap().symbols().iter().copied());
        }
        assert_eq!(seen.len(), palette.len());
    }

    #[test]
    fn zero_length_rejected() {
        let mut generator = SequenceGenerator::seeded(0);
        assert!(matches!(
            generator.generate(0, &Palette::default()),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn works_with_thread_rng() {
        let mut generator = SequenceGenerator::new(rand::rng());
        let code = generator.generate(4, &Palette::default()).unwrap();
        assert_eq!(code.len(), 4);
    }
}
