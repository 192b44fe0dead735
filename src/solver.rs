//! Set validity scoring and exhaustive set search.
//!
//! ## Scoring Scheme
//!
//! For a schema of depth N, each attribute's variations get positional
//! weights N^0, N^1, ..., N^(N-1) in declared order. Summing one attribute's
//! weights across a hand of N cards gives an attribute score with two
//! distinguished outcomes:
//!
//! - all N cards share a variation: the score is N times its weight, one of
//!   {N^1, ..., N^N}
//! - all N cards show distinct variations: every weight appears once, so the
//!   score is N^0 + N^1 + ... + N^(N-1)
//!
//! No other assignment of N variations can reach any of those scores (the
//! weights form a base-N positional system). A hand is a set exactly when
//! every attribute score is one of the distinguished values. This is the
//! classic "all same or all different, per attribute" rule, generalized to
//! arbitrary depth.

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::error::SolverError;
use crate::rng::DealRng;
use crate::schema::{AttributeKey, AttributeSchema, Variation};

/// Positional weight table derived from an [`AttributeSchema`].
///
/// A pure function of the schema: for each attribute, variation -> N^index,
/// plus the set of attribute scores that indicate "all same" or "all
/// different". Computed once and never mutated.
///
/// The table a [`SetSolver`] uses is built from its own schema; building a
/// table for some other schema is done explicitly with [`ScoreTable::new`],
/// not by passing an override into the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTable {
    weights: FxHashMap<AttributeKey, FxHashMap<Variation, u64>>,
    valid_scores: FxHashSet<u64>,
    depth: usize,
}

impl ScoreTable {
    /// Build the weight table for a schema.
    #[must_use]
    pub fn new(schema: &AttributeSchema) -> Self {
        let depth = schema.depth();
        let base = depth as u64;

        let mut weights = FxHashMap::default();
        for key in schema.keys() {
            if let Some(variations) = schema.variations(key) {
                let row: FxHashMap<Variation, u64> = variations
                    .iter()
                    .enumerate()
                    .map(|(index, variation)| (variation.clone(), base.pow(index as u32)))
                    .collect();
                weights.insert(key.clone(), row);
            }
        }

        // {N^1 .. N^N} for all-same, plus sum(N^0 .. N^(N-1)) for
        // all-different. At depth 1 the two coincide at 1.
        let mut valid_scores: FxHashSet<u64> =
            (1..=depth as u32).map(|k| base.pow(k)).collect();
        valid_scores.insert((0..depth as u32).map(|k| base.pow(k)).sum());

        Self {
            weights,
            valid_scores,
            depth,
        }
    }

    /// Schema depth this table was built for.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The weight of one variation under one attribute.
    ///
    /// # Errors
    ///
    /// Returns a lookup error if the attribute or the variation is not in
    /// the table.
    pub fn weight(&self, key: &AttributeKey, variation: &Variation) -> Result<u64, SolverError> {
        let row = self
            .weights
            .get(key)
            .ok_or_else(|| SolverError::MissingCardAttribute {
                attribute: key.to_string(),
            })?;
        row.get(variation)
            .copied()
            .ok_or_else(|| SolverError::UnknownVariation {
                attribute: key.to_string(),
                variation: variation.to_string(),
            })
    }

    /// Does this attribute score indicate all-same or all-different?
    #[must_use]
    pub fn is_valid_score(&self, score: u64) -> bool {
        self.valid_scores.contains(&score)
    }

    /// The full set of valid attribute scores.
    #[must_use]
    pub fn valid_scores(&self) -> &FxHashSet<u64> {
        &self.valid_scores
    }
}

/// Answers set-membership and set-enumeration queries for one schema.
///
/// Construction validates nothing beyond what [`AttributeSchema`] already
/// guarantees; it derives the [`ScoreTable`] once, and the solver is then
/// reused across any number of queries. All queries are pure.
///
/// ## Example
///
/// ```
/// use set_solver::{DealRng, SetSolver, presets};
///
/// let solver = SetSolver::new(presets::three_variation());
/// let mut rng = DealRng::new(42);
///
/// let game = solver.deal_game(12, &mut rng);
/// let sets = solver.find_all_sets(&game).unwrap();
/// for hand in &sets {
///     assert!(solver.check_for_set(hand).unwrap());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SetSolver {
    schema: AttributeSchema,
    table: ScoreTable,
}

impl SetSolver {
    /// Create a solver for a validated schema.
    #[must_use]
    pub fn new(schema: AttributeSchema) -> Self {
        let table = ScoreTable::new(&schema);
        debug!(
            depth = schema.depth(),
            attributes = schema.attribute_count(),
            "set solver ready"
        );
        Self { schema, table }
    }

    /// Validate a raw attribute map and create a solver for it.
    ///
    /// # Errors
    ///
    /// Same contract errors as [`AttributeSchema::new`].
    pub fn from_attributes(
        attributes: FxHashMap<AttributeKey, Vec<Variation>>,
    ) -> Result<Self, SolverError> {
        Ok(Self::new(AttributeSchema::new(attributes)?))
    }

    /// The schema this solver was built from.
    #[must_use]
    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// The derived weight table.
    #[must_use]
    pub fn score_table(&self) -> &ScoreTable {
        &self.table
    }

    /// Hand size required for a valid set (the schema depth N).
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.schema.depth()
    }

    /// Is this hand a valid set?
    ///
    /// For each attribute, sums the hand's variation weights; the hand is a
    /// set iff every attribute score is a valid score (see the module docs
    /// for why that captures "all same or all different"). Pure: the same
    /// hand always yields the same answer.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::HandSizeMismatch`] if the hand does not have
    /// exactly N cards (checked before any scoring), and a lookup error if
    /// a card's value is absent from the weight table.
    pub fn check_for_set(&self, hand: &[Card]) -> Result<bool, SolverError> {
        let expected = self.schema.depth();
        if hand.len() != expected {
            return Err(SolverError::HandSizeMismatch {
                expected,
                found: hand.len(),
            });
        }
        let refs: SmallVec<[&Card; 8]> = hand.iter().collect();
        self.check_refs(&refs)
    }

    /// Scoring core shared by `check_for_set` and `find_all_sets`.
    /// Callers guarantee `hand.len() == depth`.
    fn check_refs(&self, hand: &[&Card]) -> Result<bool, SolverError> {
        let mut scores: SmallVec<[u64; 8]> = SmallVec::new();
        for key in self.schema.keys() {
            let mut score = 0u64;
            for card in hand {
                let value =
                    card.get(key)
                        .ok_or_else(|| SolverError::MissingCardAttribute {
                            attribute: key.to_string(),
                        })?;
                score += self.table.weight(key, value)?;
            }
            scores.push(score);
        }
        Ok(scores.iter().all(|&score| self.table.is_valid_score(score)))
    }

    /// Enumerate every valid set within a collection of cards.
    ///
    /// Checks each of the C(|cards|, N) combinations once, in lexicographic
    /// input-position order, and returns the passing hands in that order.
    /// A collection smaller than N yields no candidates and no error.
    ///
    /// # Errors
    ///
    /// Propagates lookup errors from scoring; the enumeration itself cannot
    /// produce a hand of the wrong size.
    pub fn find_all_sets(&self, cards: &[Card]) -> Result<Vec<Vec<Card>>, SolverError> {
        let depth = self.schema.depth();
        let mut sets = Vec::new();
        let mut candidates = 0usize;

        for combo in (0..cards.len()).combinations(depth) {
            candidates += 1;
            let hand: SmallVec<[&Card; 8]> = combo.iter().map(|&i| &cards[i]).collect();
            if self.check_refs(&hand)? {
                sets.push(combo.into_iter().map(|i| cards[i].clone()).collect());
            }
        }

        debug!(candidates, found = sets.len(), "set search exhausted");
        Ok(sets)
    }

    /// Deal `n` independently randomized cards from this solver's schema.
    #[must_use]
    pub fn deal_game(&self, n: usize, rng: &mut DealRng) -> Vec<Card> {
        (0..n).map(|_| Card::random(&self.schema, rng)).collect()
    }
}
