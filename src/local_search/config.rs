//! 2-opt configuration.

use crate::error::{Result, TspError};

/// Configuration for the 2-opt local search.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_passes(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptConfig {
    /// A move is accepted only if it shortens the tour by more than this.
    pub tolerance: f64,

    /// Maximum number of full passes. 0 = run to a local optimum.
    pub max_passes: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_passes: 0,
        }
    }
}

impl TwoOptConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(TspError::invalid_config(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TwoOptConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-20);
        assert_eq!(config.max_passes, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_tolerance() {
        assert!(TwoOptConfig::default().with_tolerance(-1.0).validate().is_err());
        assert!(TwoOptConfig::default().with_tolerance(f64::NAN).validate().is_err());
    }
}
