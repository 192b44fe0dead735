//! # set-solver
//!
//! A generalized solver for the Set card game: decide whether a hand of
//! cards is a valid set, and enumerate every valid set within a larger
//! collection, for arbitrary attribute schemas rather than the fixed
//! 4-attribute, 3-variation deck.
//!
//! ## Design Principles
//!
//! 1. **Schema-Agnostic**: No hardcoded attributes or variations. Games
//!    configure their schema at startup; the solver only requires a
//!    `number` attribute, whose variation count fixes the depth N (and
//!    therefore the hand size).
//!
//! 2. **Derive Once, Query Many**: A solver computes its positional weight
//!    table at construction and answers any number of pure queries.
//!
//! 3. **Injected Randomness**: Dealing takes a seeded [`DealRng`], so
//!    every game is replayable.
//!
//! ## Scoring
//!
//! Each attribute's variations get weights N^0..N^(N-1) in declared order.
//! A hand's per-attribute weight sum lands on a valid score exactly when
//! the hand is all-same or all-different in that attribute; a hand is a set
//! when every attribute is. See [`solver`] for the argument.
//!
//! ## Example
//!
//! ```
//! use set_solver::{DealRng, SetSolver, presets};
//!
//! let solver = SetSolver::new(presets::three_variation());
//! let mut rng = DealRng::new(42);
//!
//! let game = solver.deal_game(24, &mut rng);
//! let all_sets = solver.find_all_sets(&game).unwrap();
//! ```
//!
//! ## Modules
//!
//! - `schema`: attribute keys, scalar variations, validated schemas
//! - `cards`: immutable cards, random and explicit construction
//! - `rng`: seeded deterministic dealing RNG
//! - `solver`: score tables, the set predicate, exhaustive search
//! - `presets`: classic three/four/five-variation schemas
//! - `error`: contract and lookup errors

pub mod cards;
pub mod error;
pub mod presets;
pub mod rng;
pub mod schema;
pub mod solver;

// Re-export commonly used types
pub use crate::cards::{Card, CardBuilder};
pub use crate::error::{ErrorKind, SolverError};
pub use crate::rng::DealRng;
pub use crate::schema::{AttributeKey, AttributeSchema, SchemaBuilder, Variation, NUMBER_ATTRIBUTE};
pub use crate::solver::{ScoreTable, SetSolver};
