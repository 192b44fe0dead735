//! Attribute schemas: the configuration that defines a game of Set.
//!
//! A schema maps attribute names ("colors", "shape", ...) to an ordered list
//! of variations. The schema is configuration, not a fixed struct - games
//! choose their own attribute names, and the solver never interprets them.
//!
//! One attribute must be named `number`. It is scored like any other
//! attribute; its only special role is that its variation count defines the
//! schema depth N, which is also the hand size for a valid set.
//!
//! ## Variation Types
//!
//! - `Int`: numeric variations (generated schemas use 0..N)
//! - `Text`: word variations ("red", "stripe", "one")
//! - `Bool`: flag variations (useful for depth-2 games)

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Name of the attribute whose variation count defines the schema depth.
pub const NUMBER_ATTRIBUTE: &str = "number";

/// Key for accessing schema and card attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The required `number` key.
    #[must_use]
    pub fn number() -> Self {
        Self::new(NUMBER_ATTRIBUTE)
    }

    /// Key name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One concrete value an attribute can take.
///
/// Variations are scalars only. A card holds exactly one variation per
/// attribute; lists of values live in the schema, never on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variation {
    /// Numeric variation.
    Int(i64),
    /// Text variation ("red", "circle").
    Text(String),
    /// Flag variation.
    Bool(bool),
}

impl Variation {
    /// Get as integer if this is an Int variation.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Variation::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text variation.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Variation::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool variation.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variation::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variation::Int(v) => write!(f, "{v}"),
            Variation::Text(s) => write!(f, "{s}"),
            Variation::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Variation {
    fn from(v: i64) -> Self {
        Variation::Int(v)
    }
}

impl From<i32> for Variation {
    fn from(v: i32) -> Self {
        Variation::Int(v as i64)
    }
}

impl From<usize> for Variation {
    fn from(v: usize) -> Self {
        Variation::Int(v as i64)
    }
}

impl From<&str> for Variation {
    fn from(v: &str) -> Self {
        Variation::Text(v.to_string())
    }
}

impl From<String> for Variation {
    fn from(v: String) -> Self {
        Variation::Text(v)
    }
}

impl From<bool> for Variation {
    fn from(v: bool) -> Self {
        Variation::Bool(v)
    }
}

/// A validated, immutable attribute schema.
///
/// Invariants, checked once at construction:
/// - at least one attribute, including one named `number`
/// - every attribute lists the same number of variations (the depth N)
/// - N >= 1, and variations within one attribute are distinct
///
/// ## Example
///
/// ```
/// use set_solver::AttributeSchema;
///
/// let schema = AttributeSchema::builder()
///     .attribute("colors", ["red", "blue", "yellow"])
///     .attribute("shape", ["circle", "square", "diamond"])
///     .attribute("fill", ["none", "stripe", "solid"])
///     .attribute("number", ["one", "two", "three"])
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.depth(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    attributes: FxHashMap<AttributeKey, Vec<Variation>>,
    /// Keys in sorted order, so iteration (and seeded dealing) is
    /// deterministic regardless of map internals.
    sorted_keys: Vec<AttributeKey>,
    depth: usize,
}

impl AttributeSchema {
    /// Validate an attribute map into a schema.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the map is empty, lacks a `number`
    /// attribute, declares variation lists of unequal length, declares an
    /// empty variation list, or repeats a variation within one attribute.
    pub fn new(attributes: FxHashMap<AttributeKey, Vec<Variation>>) -> Result<Self, SolverError> {
        if attributes.is_empty() {
            return Err(SolverError::EmptySchema);
        }

        let depth = attributes
            .get(&AttributeKey::number())
            .ok_or(SolverError::MissingNumberAttribute)?
            .len();

        for (key, variations) in &attributes {
            if variations.is_empty() {
                return Err(SolverError::EmptyVariationList {
                    attribute: key.to_string(),
                });
            }
            if variations.len() != depth {
                return Err(SolverError::VariationCountMismatch {
                    attribute: key.to_string(),
                    expected: depth,
                    found: variations.len(),
                });
            }
            let distinct: FxHashSet<&Variation> = variations.iter().collect();
            if distinct.len() != variations.len() {
                return Err(SolverError::DuplicateVariation {
                    attribute: key.to_string(),
                });
            }
        }

        let mut sorted_keys: Vec<AttributeKey> = attributes.keys().cloned().collect();
        sorted_keys.sort();

        Ok(Self {
            attributes,
            sorted_keys,
            depth,
        })
    }

    /// Start building a schema attribute by attribute.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The schema depth N: variations per attribute, and the hand size
    /// required for a valid set.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// The declared variation list for an attribute, in schema order.
    #[must_use]
    pub fn variations(&self, key: &AttributeKey) -> Option<&[Variation]> {
        self.attributes.get(key).map(Vec::as_slice)
    }

    /// Attribute keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &AttributeKey> {
        self.sorted_keys.iter()
    }

    /// Does the schema define this attribute?
    #[must_use]
    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.attributes.contains_key(key)
    }
}

/// Builder for [`AttributeSchema`].
///
/// Collects attributes and validates them all at `build`.
#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    attributes: FxHashMap<AttributeKey, Vec<Variation>>,
}

impl SchemaBuilder {
    /// Add an attribute with its ordered variation list.
    #[must_use]
    pub fn attribute<K, I, V>(mut self, key: K, variations: I) -> Self
    where
        K: Into<AttributeKey>,
        I: IntoIterator<Item = V>,
        V: Into<Variation>,
    {
        self.attributes
            .insert(key.into(), variations.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the collected attributes into a schema.
    ///
    /// # Errors
    ///
    /// Same contract errors as [`AttributeSchema::new`].
    pub fn build(self) -> Result<AttributeSchema, SolverError> {
        AttributeSchema::new(self.attributes)
    }
}
