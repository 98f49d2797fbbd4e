//! 0/1 knapsack problem model.
//!
//! Defines the fixed problem instance the optimizer scores candidates
//! against: an ordered item list and a weight capacity. The model owns no
//! mutable state; one instance can safely back any number of concurrent
//! runs.
//!
//! # References
//!
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*
//! - Geem, Kim & Loganathan (2001), "A New Heuristic Optimization
//!   Algorithm: Harmony Search"

mod model;

pub use model::{Item, Knapsack};
