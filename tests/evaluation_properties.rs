//! Property-based tests for guess evaluation and round control.
//!
//! These tests use proptest to check scoring and lifecycle rules across
//! many randomly generated codes.

use mastermind::core::{Code, GameError, Palette, evaluate};
use mastermind::game::{GameConfig, RoundController, RoundState};
use proptest::prelude::*;

const SYMBOLS: [char; 6] = ['R', 'G', 'B', 'Y', 'O', 'P'];

prop_compose! {
    fn arbitrary_code(length: usize)(
        indices in prop::collection::vec(0..SYMBOLS.len(), length)
    ) -> Code {
        Code::from_symbols(indices.into_iter().map(|i| SYMBOLS[i]))
    }
}

prop_compose! {
    fn code_pair()(length in 1..=8usize)(
        hidden in arbitrary_code(length),
        guess in arbitrary_code(length),
    ) -> (Code, Code) {
        (hidden, guess)
    }
}

/// Count credit per symbol: exact markers plus partials recomputed by
/// multiset intersection of the unmatched pegs.
fn expected_partials(hidden: &Code, guess: &Code) -> usize {
    let mut hidden_left = Vec::new();
    let mut guess_left = Vec::new();
    for (&h, &g) in hidden.symbols().iter().zip(guess.symbols()) {
        if h != g {
            hidden_left.push(h);
            guess_left.push(g);
        }
    }

    SYMBOLS
        .iter()
        .map(|s| {
            let in_hidden = hidden_left.iter().filter(|&&c| c == *s).count();
            let in_guess = guess_left.iter().filter(|&&c| c == *s).count();
            in_hidden.min(in_guess)
        })
        .sum()
}

proptest! {
    #[test]
    fn credits_never_exceed_length((hidden, guess) in code_pair()) {
        let hint = evaluate(&Palette::default(), &hidden, &guess).unwrap();
        prop_assert!(hint.exact_matches() + hint.partial_matches() <= hidden.len());
        prop_assert_eq!(hint.markers().len(), hidden.len());
    }

    #[test]
    fn credits_per_symbol_bounded((hidden, guess) in code_pair()) {
        let hint = evaluate(&Palette::default(), &hidden, &guess).unwrap();
        let hidden_counts = hidden.symbol_counts();
        let guess_counts = guess.symbol_counts();

        // Total credit equals the multiset intersection of the two codes
        let overlap: usize = SYMBOLS
            .iter()
            .map(|s| {
                let h = hidden_counts.get(s).copied().unwrap_or(0);
                let g = guess_counts.get(s).copied().unwrap_or(0);
                h.min(g)
            })
            .sum();
        prop_assert_eq!(hint.exact_matches() + hint.partial_matches(), overlap);
        prop_assert_eq!(hint.partial_matches(), expected_partials(&hidden, &guess));
    }

    #[test]
    fn markers_show_only_exact_hits((hidden, guess) in code_pair()) {
        let hint = evaluate(&Palette::default(), &hidden, &guess).unwrap();
        let row: Vec<char> = hint.marker_row().chars().collect();

        for (i, (&h, &g)) in hidden.symbols().iter().zip(guess.symbols()).enumerate() {
            if h == g {
                prop_assert_eq!(row[i], g);
            } else {
                prop_assert_eq!(row[i], '-');
            }
        }
        prop_assert_eq!(row.iter().filter(|&&c| c != '-').count(), hint.exact_matches());
    }

    #[test]
    fn identical_codes_fully_exact(code in (1..=8usize).prop_flat_map(arbitrary_code)) {
        let hint = evaluate(&Palette::default(), &code, &code).unwrap();
        prop_assert_eq!(hint.exact_matches(), code.len());
        prop_assert_eq!(hint.partial_matches(), 0);
        prop_assert!(hint.is_solved());
    }

    #[test]
    fn disjoint_codes_score_zero(
        hidden in prop::collection::vec(prop::sample::select(vec!['R', 'G', 'B']), 4),
        guess in prop::collection::vec(prop::sample::select(vec!['Y', 'O', 'P']), 4),
    ) {
        let hint = evaluate(
            &Palette::default(),
            &Code::from_symbols(hidden),
            &Code::from_symbols(guess),
        ).unwrap();
        prop_assert_eq!(hint.exact_matches(), 0);
        prop_assert_eq!(hint.partial_matches(), 0);
    }

    #[test]
    fn evaluation_is_deterministic((hidden, guess) in code_pair()) {
        let palette = Palette::default();
        prop_assert_eq!(
            evaluate(&palette, &hidden, &guess).unwrap(),
            evaluate(&palette, &hidden, &guess).unwrap()
        );
    }

    #[test]
    fn rejected_input_never_mutates_round(
        seed in any::<u64>(),
        bad in prop_oneof![
            "[RGBYOP]{0,3}",
            "[RGBYOP]{5,8}",
            "[RGBYOP]{0,3}[XZW][RGBYOP]{0,3}",
        ],
    ) {
        let mut controller = RoundController::seeded(GameConfig::default(), seed);
        let first = controller.submit_raw("RRGG").unwrap();

        let result = controller.submit_raw(&bad);
        let shape_or_symbol = matches!(
            result,
            Err(GameError::InvalidGuessShape { .. } | GameError::InvalidSymbol { .. })
        );
        // A finished round rejects everything without mutation too
        prop_assert!(shape_or_symbol || first.state.is_terminal());
        prop_assert!(result.is_err());
        prop_assert_eq!(controller.attempts().len(), 1);
        prop_assert_eq!(controller.state(), first.state);
        let expected_remaining = if first.state == RoundState::Won { 6 } else { 5 };
        prop_assert_eq!(controller.remaining_attempts(), expected_remaining);
    }

    #[test]
    fn round_ends_within_attempt_limit(
        seed in any::<u64>(),
        max_attempts in 1..=10u32,
        guesses in prop::collection::vec("[RGBYOP]{4}", 10),
    ) {
        let config = GameConfig::new(Palette::default(), 4, max_attempts).unwrap();
        let mut controller = RoundController::seeded(config, seed);

        for guess in &guesses {
            if controller.state().is_terminal() {
                prop_assert_eq!(
                    controller.submit_raw(guess),
                    Err(GameError::RoundAlreadyFinished)
                );
                continue;
            }
            let before = controller.remaining_attempts();
            let submission = controller.submit_raw(guess).unwrap();
            match submission.state {
                RoundState::Won => prop_assert_eq!(controller.remaining_attempts(), before),
                RoundState::Lost => prop_assert_eq!(controller.remaining_attempts(), 0),
                RoundState::InProgress => {
                    prop_assert_eq!(controller.remaining_attempts(), before - 1);
                }
            }
        }

        prop_assert!(controller.attempts().len() <= max_attempts as usize);

        controller.reset();
        prop_assert_eq!(controller.state(), RoundState::InProgress);
        prop_assert_eq!(controller.remaining_attempts(), max_attempts);
        prop_assert!(controller.attempts().is_empty());
    }
}
