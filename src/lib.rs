//! Harmony Search solver for the 0/1 knapsack problem.
//!
//! Provides three layers, leaves first:
//!
//! - **[`knapsack`]**: The problem model — a fixed item set and capacity
//!   that scores candidate selections. Overweight candidates score zero
//!   rather than being rejected, so they stay in harmony memory and are
//!   naturally displaced by better candidates.
//! - **[`hs`]**: The Harmony Search optimizer — maintains a fixed-size
//!   harmony memory of candidate solutions, improvises one new candidate
//!   per iteration, and replaces the worst memory slot on improvement.
//! - **[`sweep`]**: The experiment runner — varies one algorithm parameter
//!   across a list of values, runs an independent optimization per value,
//!   and collects convergence traces and timings for comparison.
//!
//! # Reproducibility
//!
//! Every run builds its own random generator from an explicit seed
//! ([`hs::HsConfig::with_seed`]). Given the same seed and configuration,
//! a run is bit-for-bit reproducible, including its convergence trace.
//! Sweep points never share generator state, so sweeps may be evaluated
//! in parallel (feature `parallel`) without changing results.
//!
//! # Example
//!
//! ```
//! use harmony_knapsack::knapsack::{Item, Knapsack};
//! use harmony_knapsack::hs::{HsConfig, HsRunner};
//!
//! let problem = Knapsack::new(
//!     vec![Item::new(2.0, 3.0), Item::new(3.0, 4.0), Item::new(4.0, 5.0)],
//!     5.0,
//! );
//! let config = HsConfig::default().with_max_iterations(200).with_seed(42);
//! let result = HsRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.best_value, problem.evaluate(&result.best_solution));
//! ```

pub mod error;
pub mod hs;
pub mod knapsack;
pub mod sweep;

mod random;

pub use error::{Error, Result};
