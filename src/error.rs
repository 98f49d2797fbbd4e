//! Crate error types.
//!
//! All validation happens before any search work is attempted; errors are
//! surfaced synchronously and never retried.

/// Errors produced by configuration validation and run preconditions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A parameter value violates its constraints.
    ///
    /// `param` names the offending parameter (`hms`, `hmcr`, `par`,
    /// `max_iter`).
    #[error("invalid configuration: `{param}` {message}")]
    Configuration {
        /// Name of the offending parameter.
        param: &'static str,
        /// What constraint was violated.
        message: String,
    },

    /// No feasible solution exists: every item's individual weight exceeds
    /// the knapsack capacity. The run is refused before any optimizer state
    /// is constructed.
    #[error("infeasible problem: every item weight exceeds capacity {capacity}")]
    Infeasible {
        /// The knapsack capacity that no single item fits into.
        capacity: f64,
    },
}

impl Error {
    pub(crate) fn configuration(param: &'static str, message: impl Into<String>) -> Self {
        Error::Configuration {
            param,
            message: message.into(),
        }
    }
}

/// Convenience alias for `Result` with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_names_parameter() {
        let err = Error::configuration("hmcr", "must be in [0, 1], got 1.5");
        assert!(err.to_string().contains("hmcr"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_infeasible_reports_capacity() {
        let err = Error::Infeasible { capacity: 5.0 };
        assert!(err.to_string().contains('5'));
    }
}
