//! Dealing tests: seeded determinism and schema round-trips.

use proptest::prelude::*;
use set_solver::{presets, Card, DealRng, SetSolver};

/// Every dealt card's values come from the originating schema.
#[test]
fn test_dealt_cards_round_trip_through_schema() {
    let solver = SetSolver::new(presets::five_variation());
    let mut rng = DealRng::new(11);

    for card in solver.deal_game(100, &mut rng) {
        assert_eq!(card.attribute_count(), solver.schema().attribute_count());
        for (key, value) in card.iter() {
            let variations = solver
                .schema()
                .variations(key)
                .expect("dealt attribute exists in schema");
            assert!(variations.contains(value), "{value} not in {key}");
        }
    }
}

/// The same seed deals the same game.
#[test]
fn test_dealing_is_seed_deterministic() {
    let solver = SetSolver::new(presets::three_variation());

    let game1 = solver.deal_game(24, &mut DealRng::new(42));
    let game2 = solver.deal_game(24, &mut DealRng::new(42));
    let game3 = solver.deal_game(24, &mut DealRng::new(43));

    assert_eq!(game1, game2);
    assert_ne!(game1, game3);
}

/// Searching a dealt game never errors: every dealt value is scorable.
#[test]
fn test_search_over_dealt_game() {
    let solver = SetSolver::new(presets::three_variation());
    let mut rng = DealRng::new(7);

    let game = solver.deal_game(12, &mut rng);
    let sets = solver.find_all_sets(&game).unwrap();
    for hand in &sets {
        assert_eq!(solver.check_for_set(hand), Ok(true));
    }
}

proptest! {
    /// Any hand dealt from a generated schema scores without error.
    #[test]
    fn prop_dealt_hand_scores(depth in 1usize..=6, seed: u64) {
        let solver = SetSolver::new(presets::generated_schema(depth));
        let mut rng = DealRng::new(seed);

        let hand = solver.deal_game(depth, &mut rng);
        prop_assert!(solver.check_for_set(&hand).is_ok());
    }

    /// N copies of any dealt card form a set at any depth.
    #[test]
    fn prop_all_same_hand_is_always_a_set(depth in 1usize..=6, seed: u64) {
        let solver = SetSolver::new(presets::generated_schema(depth));
        let mut rng = DealRng::new(seed);

        let card = Card::random(solver.schema(), &mut rng);
        let hand: Vec<Card> = std::iter::repeat_with(|| card.clone()).take(depth).collect();
        prop_assert_eq!(solver.check_for_set(&hand), Ok(true));
    }

    /// A dealt hand of N distinct-position cards from one attribute column:
    /// taking the i-th variation of every attribute for i in 0..N gives the
    /// all-different set, at any depth.
    #[test]
    fn prop_diagonal_hand_is_always_a_set(depth in 1usize..=6) {
        let solver = SetSolver::new(presets::generated_schema(depth));

        let hand: Vec<Card> = (0..depth)
            .map(|index| {
                let mut builder = Card::builder();
                for key in solver.schema().keys() {
                    let variations = solver.schema().variations(key).unwrap();
                    builder = builder.value(key.clone(), variations[index].clone());
                }
                builder.build().unwrap()
            })
            .collect();

        prop_assert_eq!(solver.check_for_set(&hand), Ok(true));
    }
}
