//! Held-Karp configuration.

use crate::error::{Result, TspError};

/// Largest city count whose non-start cities fit in a `usize` subset mask.
pub const MAX_EXACT_CITIES: usize = usize::BITS as usize;

/// Configuration for the Held-Karp solver.
///
/// The solver needs O(n·2ⁿ) memory and O(n²·2ⁿ) time. `max_cities` lets a
/// caller refuse instances above a chosen size instead of exhausting memory;
/// by default only the mask-width limit applies.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::HeldKarpConfig;
///
/// let config = HeldKarpConfig::default().with_max_cities(20);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_cities, 20);
/// ```
#[derive(Debug, Clone)]
pub struct HeldKarpConfig {
    /// Largest number of cities accepted.
    pub max_cities: usize,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_cities: MAX_EXACT_CITIES,
        }
    }
}

impl HeldKarpConfig {
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_cities < 2 {
            return Err(TspError::invalid_config(format!(
                "max_cities must be at least 2, got {}",
                self.max_cities
            )));
        }
        if self.max_cities > MAX_EXACT_CITIES {
            return Err(TspError::invalid_config(format!(
                "max_cities must be at most {MAX_EXACT_CITIES}, got {}",
                self.max_cities
            )));
        }
        Ok(())
    }
}
