//! Sweep execution.

use super::types::{SweepParam, SweepResult};
use crate::error::{Error, Result};
use crate::hs::{HsConfig, HsRunner};
use crate::knapsack::Knapsack;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes a parameter sweep: one independent Harmony Search run per
/// swept value, in input order.
///
/// # Usage
///
/// ```
/// use harmony_knapsack::knapsack::{Item, Knapsack};
/// use harmony_knapsack::hs::HsConfig;
/// use harmony_knapsack::sweep::{SweepParam, SweepRunner};
///
/// let problem = Knapsack::new(vec![Item::new(2.0, 3.0), Item::new(3.0, 4.0)], 5.0);
/// let base = HsConfig::default().with_seed(42);
/// let results = SweepRunner::run(&problem, &base, SweepParam::Hms, &[5.0, 10.0, 20.0]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
pub struct SweepRunner;

impl SweepRunner {
    /// Runs the sweep sequentially: each point completes before the next
    /// begins.
    ///
    /// All validation happens up front; no run is attempted when the value
    /// list is empty, any value violates the swept parameter's constraints,
    /// the base configuration is invalid, or the problem is infeasible.
    pub fn run(
        problem: &Knapsack,
        base: &HsConfig,
        param: SweepParam,
        values: &[f64],
    ) -> Result<Vec<SweepResult>> {
        Self::validate(problem, base, param, values)?;
        values
            .iter()
            .map(|&value| Self::run_point(problem, base, param, value))
            .collect()
    }

    /// Runs the sweep with points distributed across rayon workers.
    ///
    /// Each point constructs its own random generator, so results are
    /// identical to [`SweepRunner::run`] for the same inputs.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(
        problem: &Knapsack,
        base: &HsConfig,
        param: SweepParam,
        values: &[f64],
    ) -> Result<Vec<SweepResult>> {
        Self::validate(problem, base, param, values)?;
        values
            .par_iter()
            .map(|&value| Self::run_point(problem, base, param, value))
            .collect()
    }

    fn validate(
        problem: &Knapsack,
        base: &HsConfig,
        param: SweepParam,
        values: &[f64],
    ) -> Result<()> {
        base.validate()?;
        if values.is_empty() {
            return Err(Error::configuration(
                param.as_str(),
                "sweep requires at least one value",
            ));
        }
        for &value in values {
            param.validate_value(value)?;
        }
        if !problem.is_feasible() {
            return Err(Error::Infeasible {
                capacity: problem.capacity(),
            });
        }
        Ok(())
    }

    fn run_point(
        problem: &Knapsack,
        base: &HsConfig,
        param: SweepParam,
        value: f64,
    ) -> Result<SweepResult> {
        let config = param.apply(base, value);
        let start = Instant::now();
        let outcome = HsRunner::run(problem, &config)?;
        let execution_time = start.elapsed();

        Ok(SweepResult {
            value,
            best_solution: outcome.best_solution,
            best_value: outcome.best_value,
            best_weight: outcome.best_weight,
            best_iteration: outcome.best_iteration,
            execution_time,
            convergence: outcome.convergence,
        })
    }
}
