//! Sweep parameter selection and per-point results.

use crate::error::{Error, Result};
use crate::hs::HsConfig;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The tunable parameter varied across a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepParam {
    /// Harmony memory size (`hms`). Values are truncated to integers.
    Hms,
    /// Memory consideration rate (`hmcr`), in [0, 1].
    Hmcr,
    /// Pitch adjustment rate (`par`), in [0, 1].
    Par,
    /// Iteration budget (`max_iter`). Values are truncated to integers.
    MaxIter,
}

impl SweepParam {
    /// The parameter's name as it appears in configuration and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepParam::Hms => "hms",
            SweepParam::Hmcr => "hmcr",
            SweepParam::Par => "par",
            SweepParam::MaxIter => "max_iter",
        }
    }

    /// Checks one swept value against this parameter's constraints.
    pub(crate) fn validate_value(&self, value: f64) -> Result<()> {
        match self {
            SweepParam::Hms | SweepParam::MaxIter => {
                // Truncation to integer must leave a positive count.
                if value.is_nan() || value < 1.0 {
                    return Err(Error::configuration(
                        self.as_str(),
                        format!("sweep values must be positive integers, got {value}"),
                    ));
                }
            }
            SweepParam::Hmcr | SweepParam::Par => {
                if !(0.0..=1.0).contains(&value) {
                    return Err(Error::configuration(
                        self.as_str(),
                        format!("sweep values must be in [0, 1], got {value}"),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Clones the base configuration with this parameter overridden.
    ///
    /// `hms` and `max_iter` values are coerced by truncation.
    pub(crate) fn apply(&self, base: &HsConfig, value: f64) -> HsConfig {
        let config = base.clone();
        match self {
            SweepParam::Hms => config.with_hms(value as usize),
            SweepParam::Hmcr => config.with_hmcr(value),
            SweepParam::Par => config.with_par(value),
            SweepParam::MaxIter => config.with_max_iterations(value as usize),
        }
    }
}

impl fmt::Display for SweepParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SweepParam {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hms" => Ok(SweepParam::Hms),
            "hmcr" => Ok(SweepParam::Hmcr),
            "par" => Ok(SweepParam::Par),
            "max_iter" => Ok(SweepParam::MaxIter),
            other => Err(Error::configuration(
                "vary_param",
                format!("must be one of hms, hmcr, par, max_iter; got `{other}`"),
            )),
        }
    }
}

/// Outcome of one sweep point: a full optimization run at one parameter
/// value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    /// The swept parameter's value for this point, as supplied.
    pub value: f64,

    /// Best selection found at this point.
    pub best_solution: Vec<bool>,

    /// Value of the best selection.
    pub best_value: f64,

    /// Weight of the best selection.
    pub best_weight: f64,

    /// 1-based iteration of the last improvement (0 if the initial memory
    /// was never beaten).
    pub best_iteration: usize,

    /// Wall-clock duration of the run.
    pub execution_time: Duration,

    /// Best-value-so-far per iteration, length `max_iterations + 1`.
    pub convergence: Vec<f64>,
}

impl SweepResult {
    /// Execution time in seconds, convenient for reporting.
    pub fn execution_seconds(&self) -> f64 {
        self.execution_time.as_secs_f64()
    }
}
