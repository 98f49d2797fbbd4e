//! Parameter-sweep experiments.
//!
//! Runs one independent Harmony Search per value of a single swept
//! parameter and collects per-value convergence traces and timings, so the
//! parameter's effect on solution quality and convergence speed can be
//! compared directly (e.g. plotted by a caller).
//!
//! Sweep points share only the read-only problem instance; each point owns
//! its optimizer state and random generator. With the `parallel` feature,
//! points are evaluated on rayon workers without changing results.

mod runner;
mod types;

pub use runner::SweepRunner;
pub use types::{SweepParam, SweepResult};
