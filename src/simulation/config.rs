//! Simulation configuration and algorithm selection.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::approx::{solve_approx_with, ApproxConfig};
use crate::distance::{DistanceMatrix, Metric};
use crate::error::{Result, TspError};
use crate::exact::{solve_exact_with, HeldKarpConfig};
use crate::local_search::{solve_heuristic_with, TwoOptConfig};
use crate::models::Tour;

/// One of the three solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Held-Karp dynamic programming (optimal).
    Exact,
    /// Christofides-style construction (bounded ratio).
    Approx,
    /// 2-opt local search (no guarantee).
    Heuristic,
}

impl Algorithm {
    /// All algorithms, in the order they are run by default.
    pub const ALL: [Algorithm; 3] = [Algorithm::Exact, Algorithm::Approx, Algorithm::Heuristic];

    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Exact => "Held-Karp",
            Algorithm::Approx => "Christofides",
            Algorithm::Heuristic => "2-opt",
        }
    }

    /// Returns `false` if this algorithm is configured to refuse `cities` cities.
    pub fn accepts(&self, cities: usize, config: &SimulationConfig) -> bool {
        match self {
            Algorithm::Exact => cities <= config.held_karp.max_cities,
            Algorithm::Approx | Algorithm::Heuristic => true,
        }
    }

    /// Runs this algorithm on `distances` with the solver settings in `config`.
    pub fn solve(&self, distances: &DistanceMatrix, config: &SimulationConfig) -> Result<Tour> {
        match self {
            Algorithm::Exact => solve_exact_with(distances, &config.held_karp),
            Algorithm::Approx => solve_approx_with(distances, &config.approx),
            Algorithm::Heuristic => solve_heuristic_with(distances, &config.two_opt),
        }
    }
}

/// Configuration for a simulation run.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Metric;
/// use u_tsp::simulation::{Algorithm, SimulationConfig};
///
/// let config = SimulationConfig::default()
///     .with_metric(Metric::Euclidean)
///     .with_algorithms(vec![Algorithm::Approx, Algorithm::Heuristic]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// How point coordinates become distances.
    pub metric: Metric,

    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,

    /// Exact solver settings.
    pub held_karp: HeldKarpConfig,

    /// Approximation settings.
    pub approx: ApproxConfig,

    /// Local search settings.
    pub two_opt: TwoOptConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            algorithms: Algorithm::ALL.to_vec(),
            held_karp: HeldKarpConfig::default(),
            approx: ApproxConfig::default(),
            two_opt: TwoOptConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_held_karp(mut self, config: HeldKarpConfig) -> Self {
        self.held_karp = config;
        self
    }

    pub fn with_approx(mut self, config: ApproxConfig) -> Self {
        self.approx = config;
        self
    }

    pub fn with_two_opt(mut self, config: TwoOptConfig) -> Self {
        self.two_opt = config;
        self
    }

    /// Validates the configuration and every solver configuration in it.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(TspError::invalid_config("no algorithms selected"));
        }
        self.held_karp.validate()?;
        self.approx.validate()?;
        self.two_opt.validate()?;
        Ok(())
    }
}

/// Configuration for a scaling run: growing instance sizes until every
/// algorithm exceeds the runtime cutoff.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::simulation::ScalingConfig;
///
/// let config = ScalingConfig::default()
///     .with_start_cities(10)
///     .with_increment(5)
///     .with_max_runtime(Duration::from_secs(60));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScalingConfig {
    /// Number of points in the first round.
    pub start_cities: usize,

    /// Points added per round.
    pub increment: usize,

    /// An algorithm whose runtime reaches this is dropped from later rounds.
    pub max_runtime: Duration,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            start_cities: 20,
            increment: 5,
            max_runtime: Duration::from_secs(1800),
        }
    }
}

impl ScalingConfig {
    pub fn with_start_cities(mut self, n: usize) -> Self {
        self.start_cities = n;
        self
    }

    pub fn with_increment(mut self, n: usize) -> Self {
        self.increment = n;
        self
    }

    pub fn with_max_runtime(mut self, limit: Duration) -> Self {
        self.max_runtime = limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.start_cities < 2 {
            return Err(TspError::invalid_config(format!(
                "start_cities must be at least 2, got {}",
                self.start_cities
            )));
        }
        if self.increment == 0 {
            return Err(TspError::invalid_config("increment must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_all() {
        let config = SimulationConfig::default();
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(config.metric, Metric::GreatCircle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_algorithms() {
        let config = SimulationConfig::default().with_algorithms(Vec::new());
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_nested() {
        let config = SimulationConfig::default()
            .with_two_opt(TwoOptConfig::default().with_tolerance(-1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Exact.name(), "Held-Karp");
        assert_eq!(Algorithm::Approx.name(), "Christofides");
        assert_eq!(Algorithm::Heuristic.name(), "2-opt");
    }

    #[test]
    fn test_exact_accepts_up_to_limit() {
        let config = SimulationConfig::default()
            .with_held_karp(HeldKarpConfig::default().with_max_cities(10));
        assert!(Algorithm::Exact.accepts(10, &config));
        assert!(!Algorithm::Exact.accepts(11, &config));
        assert!(Algorithm::Approx.accepts(10_000, &config));
        assert!(Algorithm::Heuristic.accepts(10_000, &config));
    }

    #[test]
    fn test_scaling_defaults() {
        let config = ScalingConfig::default();
        assert_eq!(config.start_cities, 20);
        assert_eq!(config.increment, 5);
        assert_eq!(config.max_runtime, Duration::from_secs(1800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scaling_validate() {
        assert!(ScalingConfig::default().with_start_cities(1).validate().is_err());
        assert!(ScalingConfig::default().with_increment(0).validate().is_err());
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&Algorithm::Heuristic).expect("serialize");
        assert_eq!(json, "\"heuristic\"");
        let back: Algorithm = serde_json::from_str("\"exact\"").expect("deserialize");
        assert_eq!(back, Algorithm::Exact);
    }
}
