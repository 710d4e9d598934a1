//! Move-selection strategies for the board game: the minimax search, the
//! classifier-backed policy, and a uniform-random fallback, unified behind
//! the [`Policy`] trait.

mod classifier;
mod heuristic;
mod policy;
mod random;
mod search;

pub use classifier::{flatten_features, Classifier, ClassifierPolicy};
pub use heuristic::{Heuristic, WindowHeuristic};
pub use policy::{Policy, PolicyError};
pub use random::RandomPolicy;
pub use search::{SearchPolicy, SearchResult};
