//! HS execution loop.

use super::config::HsConfig;
use crate::error::{Error, Result};
use crate::knapsack::Knapsack;
use crate::random::create_rng;
use rand::seq::index;
use rand::Rng;

/// Items drawn per slot during memory initialization are capped at this
/// count; initial harmonies stay sparse and diverse.
const INIT_MAX_PICKS: usize = 5;

/// Result of a Harmony Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsResult {
    /// The best selection found, one bit per item.
    pub best_solution: Vec<bool>,

    /// Value of the best selection (equals `evaluate(best_solution)`).
    pub best_value: f64,

    /// Weight of the best selection.
    pub best_weight: f64,

    /// 1-based iteration at which the best value last improved, or 0 when
    /// the initial memory's best was never beaten.
    pub best_iteration: usize,

    /// Total improvisation iterations executed (always the configured
    /// budget; there is no early termination).
    pub iterations: usize,

    /// Best value after each iteration, starting with the initial memory's
    /// best. Length is `max_iterations + 1` and the sequence is
    /// non-decreasing.
    pub convergence: Vec<f64>,
}

/// Executes the Harmony Search algorithm.
///
/// The runner holds no state between calls; every run builds a fresh
/// harmony memory and its own random generator.
///
/// # Usage
///
/// ```
/// use harmony_knapsack::knapsack::{Item, Knapsack};
/// use harmony_knapsack::hs::{HsConfig, HsRunner};
///
/// let problem = Knapsack::new(vec![Item::new(2.0, 3.0), Item::new(3.0, 4.0)], 5.0);
/// let config = HsConfig::default().with_seed(42);
/// let result = HsRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.convergence.len(), config.max_iterations + 1);
/// ```
pub struct HsRunner;

impl HsRunner {
    /// Runs Harmony Search with a generator built from the configured seed
    /// (or from entropy when no seed is set).
    ///
    /// Returns [`Error::Configuration`] for invalid parameters and
    /// [`Error::Infeasible`] when no item individually fits the capacity;
    /// in both cases no search state is constructed.
    pub fn run(problem: &Knapsack, config: &HsConfig) -> Result<HsResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs Harmony Search drawing from an injected generator.
    ///
    /// Useful for reproducible tests and for parallel sweeps where each
    /// worker must own an independent generator.
    pub fn run_with_rng<R: Rng>(
        problem: &Knapsack,
        config: &HsConfig,
        rng: &mut R,
    ) -> Result<HsResult> {
        config.validate()?;
        if !problem.is_feasible() {
            return Err(Error::Infeasible {
                capacity: problem.capacity(),
            });
        }
        Ok(HarmonySearch::new(problem, config, rng).run())
    }
}

/// Search state owned exclusively for the duration of one run.
struct HarmonySearch<'a, R: Rng> {
    problem: &'a Knapsack,
    config: &'a HsConfig,
    rng: R,
    /// Exactly `hms` rows at all times; slots are only ever replaced.
    memory: Vec<Vec<bool>>,
    /// Score of each memory row, kept in lockstep with `memory`.
    values: Vec<f64>,
    best: Vec<bool>,
    best_value: f64,
    best_iteration: usize,
    convergence: Vec<f64>,
}

impl<'a, R: Rng> HarmonySearch<'a, R> {
    fn new(problem: &'a Knapsack, config: &'a HsConfig, rng: R) -> Self {
        Self {
            problem,
            config,
            rng,
            memory: Vec::with_capacity(config.hms),
            values: Vec::with_capacity(config.hms),
            best: vec![false; problem.len()],
            best_value: 0.0,
            best_iteration: 0,
            convergence: Vec::with_capacity(config.max_iterations + 1),
        }
    }

    /// Populates all `hms` memory slots with sparse random selections and
    /// seeds the best record from the best slot.
    fn initialize_memory(&mut self) {
        let items = self.problem.items();
        let capacity = self.problem.capacity();
        let feasible = self.problem.feasible_indices();

        for _ in 0..self.config.hms {
            let mut solution = vec![false; items.len()];
            let count = self
                .rng
                .random_range(0..=feasible.len().min(INIT_MAX_PICKS));
            let picks = index::sample(&mut self.rng, feasible.len(), count);

            // Admit sampled items in sampling order while the running
            // weight stays within capacity. A later pick may be skipped
            // even though an earlier, heavier one was admitted.
            let mut weight = 0.0;
            for pick in picks {
                let idx = feasible[pick];
                if weight + items[idx].weight <= capacity {
                    solution[idx] = true;
                    weight += items[idx].weight;
                }
            }
            self.values.push(self.problem.evaluate(&solution));
            self.memory.push(solution);
        }

        // First slot wins ties.
        let (mut best_idx, mut best_value) = (0, self.values[0]);
        for (i, &value) in self.values.iter().enumerate().skip(1) {
            if value > best_value {
                best_idx = i;
                best_value = value;
            }
        }
        self.best = self.memory[best_idx].clone();
        self.best_value = best_value;
        self.convergence.push(best_value);
    }

    /// Builds one new candidate, dimension by dimension in index order.
    ///
    /// Repair is strictly left-to-right: a bit that would push the running
    /// weight of the dimensions decided so far over capacity is cleared on
    /// the spot. Earlier accepted bits are never revisited.
    fn improvise(&mut self) -> Vec<bool> {
        let items = self.problem.items();
        let capacity = self.problem.capacity();
        let mut candidate = vec![false; items.len()];
        let mut weight = 0.0;

        for i in 0..items.len() {
            let mut bit = if self.rng.random_range(0.0..1.0) < self.config.hmcr {
                // Memory consideration: copy from a uniformly chosen row,
                // then pitch-adjust by flipping.
                let row = self.rng.random_range(0..self.memory.len());
                let from_memory = self.memory[row][i];
                if self.rng.random_range(0.0..1.0) < self.config.par {
                    !from_memory
                } else {
                    from_memory
                }
            } else {
                self.rng.random_bool(0.5)
            };

            if bit && weight + items[i].weight > capacity {
                bit = false;
            }
            if bit {
                candidate[i] = true;
                weight += items[i].weight;
            }
        }
        candidate
    }

    /// Scores the candidate and lets it displace the worst memory slot on
    /// strict improvement. `iteration` is 1-based.
    fn replacement_step(&mut self, candidate: Vec<bool>, iteration: usize) {
        let value = self.problem.evaluate(&candidate);

        // Worst slot: minimum score, ties broken by lowest index.
        let (mut worst_idx, mut worst_value) = (0, self.values[0]);
        for (i, &v) in self.values.iter().enumerate().skip(1) {
            if v < worst_value {
                worst_idx = i;
                worst_value = v;
            }
        }

        if value > worst_value {
            if value > self.best_value {
                self.best = candidate.clone();
                self.best_value = value;
                self.best_iteration = iteration;
            }
            self.memory[worst_idx] = candidate;
            self.values[worst_idx] = value;
        }
    }

    fn run(mut self) -> HsResult {
        self.initialize_memory();

        for iteration in 1..=self.config.max_iterations {
            let candidate = self.improvise();
            self.replacement_step(candidate, iteration);
            self.convergence.push(self.best_value);
            debug_assert_eq!(self.memory.len(), self.config.hms);
        }

        HsResult {
            best_weight: self.problem.weight(&self.best),
            best_solution: self.best,
            best_value: self.best_value,
            best_iteration: self.best_iteration,
            iterations: self.config.max_iterations,
            convergence: self.convergence,
        }
    }
}
