//! Error types for schema validation and set queries.
//!
//! Two classes of failure exist:
//!
//! - **Contract** errors: the caller handed over malformed data (a schema
//!   with unequal variation lists, a hand of the wrong size). These are
//!   programmer errors, not game outcomes.
//! - **Lookup** errors: a card carries a value the solver's schema does not
//!   know about. This means the card and the schema come from different
//!   games.
//!
//! Every error is raised at the point of detection and propagated to the
//! caller. Nothing is retried or silently recovered.

use thiserror::Error;

/// Coarse classification of a [`SolverError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: the caller violated an API precondition.
    Contract,
    /// Schema/card mismatch: a key or value was not found where required.
    Lookup,
}

/// Errors produced by schema validation, card construction, and set queries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    /// The attribute map was empty.
    #[error("attribute schema must contain at least one attribute")]
    EmptySchema,

    /// No `number` attribute. Its variation count defines the hand size.
    #[error("attribute schema requires a `number` attribute")]
    MissingNumberAttribute,

    /// An attribute's variation list differs in length from `number`'s.
    #[error("attribute `{attribute}` has {found} variations, expected {expected}")]
    VariationCountMismatch {
        /// Offending attribute name.
        attribute: String,
        /// Variation count defined by the `number` attribute.
        expected: usize,
        /// Variation count actually supplied.
        found: usize,
    },

    /// An attribute declared no variations. Depth must be at least 1.
    #[error("attribute `{attribute}` declares no variations")]
    EmptyVariationList {
        /// Offending attribute name.
        attribute: String,
    },

    /// An attribute listed the same variation twice.
    #[error("attribute `{attribute}` lists a duplicate variation")]
    DuplicateVariation {
        /// Offending attribute name.
        attribute: String,
    },

    /// An explicitly constructed card was given no values at all.
    #[error("a card requires at least one attribute value")]
    EmptyCard,

    /// A hand submitted for checking does not have exactly N cards.
    #[error("hand has {found} cards, expected {expected}")]
    HandSizeMismatch {
        /// Hand size required by the schema (its depth N).
        expected: usize,
        /// Number of cards actually submitted.
        found: usize,
    },

    /// A card has no value for an attribute the schema defines.
    #[error("card has no value for attribute `{attribute}`")]
    MissingCardAttribute {
        /// Schema attribute absent from the card.
        attribute: String,
    },

    /// A card's value for an attribute is not among that attribute's
    /// declared variations.
    #[error("value `{variation}` is not a declared variation of `{attribute}`")]
    UnknownVariation {
        /// Attribute whose variation list was searched.
        attribute: String,
        /// The value that was not found, rendered for display.
        variation: String,
    },
}

impl SolverError {
    /// Which class of failure this is.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolverError::EmptySchema
            | SolverError::MissingNumberAttribute
            | SolverError::VariationCountMismatch { .. }
            | SolverError::EmptyVariationList { .. }
            | SolverError::DuplicateVariation { .. }
            | SolverError::EmptyCard
            | SolverError::HandSizeMismatch { .. } => ErrorKind::Contract,
            SolverError::MissingCardAttribute { .. } | SolverError::UnknownVariation { .. } => {
                ErrorKind::Lookup
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(SolverError::EmptySchema.kind(), ErrorKind::Contract);
        assert_eq!(
            SolverError::HandSizeMismatch {
                expected: 3,
                found: 4
            }
            .kind(),
            ErrorKind::Contract
        );
        assert_eq!(
            SolverError::UnknownVariation {
                attribute: "colors".to_string(),
                variation: "mauve".to_string()
            }
            .kind(),
            ErrorKind::Lookup
        );
    }

    #[test]
    fn test_error_display() {
        let err = SolverError::VariationCountMismatch {
            attribute: "fill".to_string(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "attribute `fill` has 2 variations, expected 3"
        );
    }
}
