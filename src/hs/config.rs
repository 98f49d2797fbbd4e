//! HS configuration.

use crate::error::{Error, Result};

/// Configuration for the Harmony Search algorithm.
///
/// # Defaults
///
/// ```
/// use harmony_knapsack::hs::HsConfig;
///
/// let config = HsConfig::default();
/// assert_eq!(config.hms, 10);
/// assert_eq!(config.max_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use harmony_knapsack::hs::HsConfig;
///
/// let config = HsConfig::default()
///     .with_hms(20)
///     .with_hmcr(0.95)
///     .with_par(0.2)
///     .with_max_iterations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HsConfig {
    /// Harmony memory size: number of candidate solutions kept.
    ///
    /// The memory never grows or shrinks during a run; slots are only
    /// replaced. Typical range: 5–50.
    pub hms: usize,

    /// Harmony memory consideration rate in [0, 1].
    ///
    /// Probability of drawing a dimension's bit from an existing memory
    /// row rather than assigning it at random. Typical range: 0.7–0.99.
    pub hmcr: f64,

    /// Pitch adjustment rate in [0, 1].
    ///
    /// Probability of flipping a memory-derived bit. Only applies when
    /// the memory-consideration branch was taken. Typical range: 0.1–0.5.
    pub par: f64,

    /// Number of improvisation iterations. A hard, unconditional budget:
    /// the loop always completes exactly this many iterations.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HsConfig {
    fn default() -> Self {
        Self {
            hms: 10,
            hmcr: 0.9,
            par: 0.3,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl HsConfig {
    /// Sets the harmony memory size.
    pub fn with_hms(mut self, hms: usize) -> Self {
        self.hms = hms;
        self
    }

    /// Sets the harmony memory consideration rate.
    pub fn with_hmcr(mut self, hmcr: f64) -> Self {
        self.hmcr = hmcr;
        self
    }

    /// Sets the pitch adjustment rate.
    pub fn with_par(mut self, par: f64) -> Self {
        self.par = par;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.hms == 0 {
            return Err(Error::configuration("hms", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.hmcr) {
            return Err(Error::configuration(
                "hmcr",
                format!("must be in [0, 1], got {}", self.hmcr),
            ));
        }
        if !(0.0..=1.0).contains(&self.par) {
            return Err(Error::configuration(
                "par",
                format!("must be in [0, 1], got {}", self.par),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::configuration("max_iter", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HsConfig::default();
        assert_eq!(config.hms, 10);
        assert!((config.hmcr - 0.9).abs() < 1e-12);
        assert!((config.par - 0.3).abs() < 1e-12);
        assert_eq!(config.max_iterations, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(HsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rates_at_bounds() {
        assert!(HsConfig::default().with_hmcr(0.0).with_par(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_hms() {
        let err = HsConfig::default().with_hms(0).validate().unwrap_err();
        assert!(err.to_string().contains("hms"));
    }

    #[test]
    fn test_validate_bad_hmcr() {
        let err = HsConfig::default().with_hmcr(1.5).validate().unwrap_err();
        assert!(err.to_string().contains("hmcr"));
    }

    #[test]
    fn test_validate_bad_par() {
        let err = HsConfig::default().with_par(-0.1).validate().unwrap_err();
        assert!(err.to_string().contains("par"));
    }

    #[test]
    fn test_validate_zero_iterations() {
        let err = HsConfig::default().with_max_iterations(0).validate().unwrap_err();
        assert!(err.to_string().contains("max_iter"));
    }

    #[test]
    fn test_validate_nan_rate_rejected() {
        assert!(HsConfig::default().with_hmcr(f64::NAN).validate().is_err());
    }
}
