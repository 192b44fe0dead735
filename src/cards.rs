//! Cards: one variation assigned per attribute.
//!
//! A `Card` is an immutable bag of attribute-name to variation assignments.
//! It is built either by uniform random draw from a schema (dealing) or by
//! explicit assignment (fixed test hands), and never mutated afterwards.
//! The solver borrows cards for the duration of a query and never retains
//! them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::rng::DealRng;
use crate::schema::{AttributeKey, AttributeSchema, Variation};

/// A playing card: exactly one variation per attribute.
///
/// Values are scalars by construction; a card can never hold a list of
/// variations for an attribute.
///
/// ## Example
///
/// ```
/// use set_solver::Card;
///
/// let card = Card::builder()
///     .value("colors", "red")
///     .value("number", "one")
///     .build()
///     .unwrap();
///
/// assert_eq!(card.get(&"colors".into()).and_then(|v| v.as_text()), Some("red"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    values: FxHashMap<AttributeKey, Variation>,
}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        // Hash entries in sorted order for determinism
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort_by_key(|(k, _)| *k);
        for (k, v) in entries {
            k.hash(hasher);
            v.hash(hasher);
        }
    }
}

impl Card {
    /// Deal a random card: for each schema attribute, independently and
    /// uniformly select one of its declared variations.
    #[must_use]
    pub fn random(schema: &AttributeSchema, rng: &mut DealRng) -> Self {
        let mut values = FxHashMap::default();
        // Sorted key order so a seeded rng deals reproducibly.
        for key in schema.keys() {
            if let Some(variations) = schema.variations(key) {
                let pick = rng.gen_index(variations.len());
                values.insert(key.clone(), variations[pick].clone());
            }
        }
        Self { values }
    }

    /// Build a card from an explicit attribute-value map.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyCard`] if no values were supplied.
    pub fn from_values(values: FxHashMap<AttributeKey, Variation>) -> Result<Self, SolverError> {
        if values.is_empty() {
            return Err(SolverError::EmptyCard);
        }
        Ok(Self { values })
    }

    /// Start building a card value by value.
    #[must_use]
    pub fn builder() -> CardBuilder {
        CardBuilder::default()
    }

    /// Get this card's variation for an attribute.
    #[must_use]
    pub fn get(&self, key: &AttributeKey) -> Option<&Variation> {
        self.values.get(key)
    }

    /// Number of attributes assigned on this card.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.values.len()
    }

    /// Iterate over this card's attribute-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &Variation)> {
        self.values.iter()
    }
}

/// Builder for explicitly assigned [`Card`]s.
#[derive(Clone, Debug, Default)]
pub struct CardBuilder {
    values: FxHashMap<AttributeKey, Variation>,
}

impl CardBuilder {
    /// Assign one attribute's value.
    #[must_use]
    pub fn value(mut self, key: impl Into<AttributeKey>, variation: impl Into<Variation>) -> Self {
        self.values.insert(key.into(), variation.into());
        self
    }

    /// Finish the card.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyCard`] if no values were assigned.
    pub fn build(self) -> Result<Card, SolverError> {
        Card::from_values(self.values)
    }
}
