//! Harmony Search (HS).
//!
//! A population-based metaheuristic inspired by musical improvisation.
//! A fixed-size "harmony memory" of candidate solutions is maintained;
//! each iteration improvises one new candidate by drawing each dimension
//! either from memory (rate `hmcr`, optionally pitch-adjusted at rate
//! `par`) or at random, then replaces the worst memory slot when the
//! candidate improves on it.
//!
//! # References
//!
//! - Geem, Kim & Loganathan (2001), "A New Heuristic Optimization
//!   Algorithm: Harmony Search"
//! - Lee & Geem (2005), "A new meta-heuristic algorithm for continuous
//!   engineering optimization"

mod config;
mod runner;

pub use config::HsConfig;
pub use runner::{HsResult, HsRunner};
