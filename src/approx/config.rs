//! Christofides configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Largest odd-vertex set the exact matching may be configured for.
///
/// The subset DP allocates 2ᵏ cells, so this caps its memory at a few
/// hundred megabytes.
pub const MAX_EXACT_MATCHING_LIMIT: usize = 24;

/// How odd-degree vertices of the spanning tree are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStrategy {
    /// Repeatedly pair the last unmatched vertex with its nearest unmatched
    /// neighbor.
    ///
    /// Fast, but not a minimum-weight matching: the 1.5× bound of the
    /// resulting tour no longer holds.
    Greedy,

    /// Minimum-weight perfect matching, which keeps the 1.5× bound.
    ///
    /// Solved exactly while the odd set has at most
    /// [`ApproxConfig::exact_matching_limit`] vertices. Larger sets fall back
    /// to a greedy matching improved by pair exchanges, without the bound.
    #[default]
    Optimal,
}

/// Configuration for the Christofides-style approximation.
///
/// # Examples
///
/// ```
/// use u_tsp::approx::{ApproxConfig, MatchingStrategy};
///
/// let config = ApproxConfig::default()
///     .with_matching(MatchingStrategy::Greedy)
///     .with_exact_matching_limit(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ApproxConfig {
    /// Matching step strategy.
    pub matching: MatchingStrategy,

    /// Largest odd-vertex count solved by the exact matching.
    pub exact_matching_limit: usize,
}

impl Default for ApproxConfig {
    fn default() -> Self {
        Self {
            matching: MatchingStrategy::default(),
            exact_matching_limit: 20,
        }
    }
}

impl ApproxConfig {
    pub fn with_matching(mut self, matching: MatchingStrategy) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_exact_matching_limit(mut self, limit: usize) -> Self {
        self.exact_matching_limit = limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.exact_matching_limit > MAX_EXACT_MATCHING_LIMIT {
            return Err(TspError::invalid_config(format!(
                "exact_matching_limit must be at most {MAX_EXACT_MATCHING_LIMIT}, got {}",
                self.exact_matching_limit
            )));
        }
        Ok(())
    }
}
