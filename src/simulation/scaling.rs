//! Scaling runs: the same point source at growing instance sizes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::{Algorithm, ScalingConfig, SimulationConfig};
use super::runner::{format_duration_hms, run_simulation, SolverReport};
use crate::error::{Result, TspError};
use crate::models::Point;

/// One instance size of a scaling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingRound {
    /// 1-based round number.
    pub round: usize,
    /// Number of leading points used.
    pub cities: usize,
    /// One report per algorithm still active in this round.
    pub reports: Vec<SolverReport>,
}

impl ScalingRound {
    /// Algorithms run in this round, in order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.reports.iter().map(|r| r.algorithm).collect()
    }
}

/// Runs the configured algorithms on the first `start_cities` points, then
/// on `increment` more points per round.
///
/// After each round, algorithms whose runtime reached
/// `scaling.max_runtime` are dropped, as is the exact solver once the
/// instance exceeds its configured `max_cities`. The run ends when no
/// algorithm is left or the points are exhausted.
///
/// # Errors
///
/// Configuration errors of either config, [`TspError::InvalidConfig`] if
/// there are fewer than `start_cities` points, and the first solver error.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::distance::Metric;
/// use u_tsp::models::random_points;
/// use u_tsp::simulation::{run_scaling, ScalingConfig, SimulationConfig};
///
/// let points = random_points(12, 3, 100.0);
/// let scaling = ScalingConfig::default()
///     .with_start_cities(6)
///     .with_increment(3)
///     .with_max_runtime(Duration::from_secs(600));
/// let config = SimulationConfig::default().with_metric(Metric::Euclidean);
/// let rounds = run_scaling(&points, &scaling, &config).unwrap();
/// let sizes: Vec<usize> = rounds.iter().map(|r| r.cities).collect();
/// assert_eq!(sizes, vec![6, 9, 12]);
/// ```
pub fn run_scaling(
    points: &[Point],
    scaling: &ScalingConfig,
    config: &SimulationConfig,
) -> Result<Vec<ScalingRound>> {
    scaling.validate()?;
    config.validate()?;
    if points.len() < scaling.start_cities {
        return Err(TspError::invalid_config(format!(
            "start_cities {} exceeds the {} available points",
            scaling.start_cities,
            points.len()
        )));
    }

    let mut active = config.algorithms.clone();
    let mut rounds = Vec::new();
    let mut cities = scaling.start_cities;
    while cities <= points.len() {
        active.retain(|a| {
            let keep = a.accepts(cities, config);
            if !keep {
                log::info!("scaling: {} refuses n={cities}, dropped", a.name());
            }
            keep
        });
        if active.is_empty() {
            break;
        }

        let round = rounds.len() + 1;
        log::info!("scaling: round {round} n={cities} algorithms={active:?}");
        let round_config = config.clone().with_algorithms(active.clone());
        let reports = run_simulation(&points[..cities], &round_config)?;
        active = within_cutoff(&reports, scaling.max_runtime);
        rounds.push(ScalingRound {
            round,
            cities,
            reports,
        });
        cities += scaling.increment;
    }
    log::info!("scaling: finished after {} rounds", rounds.len());
    Ok(rounds)
}

/// Algorithms whose runtime stayed strictly below `max_runtime`.
fn within_cutoff(reports: &[SolverReport], max_runtime: Duration) -> Vec<Algorithm> {
    reports
        .iter()
        .filter(|r| {
            let keep = r.elapsed < max_runtime;
            if !keep {
                log::info!(
                    "scaling: {} took {}, dropped",
                    r.algorithm.name(),
                    format_duration_hms(r.elapsed)
                );
            }
            keep
        })
        .map(|r| r.algorithm)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::evaluation::is_valid_tour;
    use crate::exact::HeldKarpConfig;
    use crate::models::{random_points, Tour};

    fn report(algorithm: Algorithm, millis: u64) -> SolverReport {
        SolverReport {
            algorithm,
            tour: Tour::new(vec![0, 1, 0], 2.0),
            elapsed: Duration::from_millis(millis),
        }
    }

    fn euclidean() -> SimulationConfig {
        SimulationConfig::default().with_metric(Metric::Euclidean)
    }

    #[test]
    fn test_within_cutoff() {
        let reports = vec![
            report(Algorithm::Exact, 10),
            report(Algorithm::Approx, 2_000),
            report(Algorithm::Heuristic, 999),
        ];
        assert_eq!(
            within_cutoff(&reports, Duration::from_secs(1)),
            vec![Algorithm::Exact, Algorithm::Heuristic]
        );
        // Reaching the cutoff exactly also drops.
        assert!(within_cutoff(&[report(Algorithm::Exact, 1_000)], Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_runs_until_points_exhausted() {
        let points = random_points(12, 8, 100.0);
        let scaling = ScalingConfig::default()
            .with_start_cities(4)
            .with_increment(4)
            .with_max_runtime(Duration::from_secs(3600));
        let rounds = run_scaling(&points, &scaling, &euclidean()).expect("runs");

        let sizes: Vec<(usize, usize)> = rounds.iter().map(|r| (r.round, r.cities)).collect();
        assert_eq!(sizes, vec![(1, 4), (2, 8), (3, 12)]);
        for r in &rounds {
            assert_eq!(r.algorithms(), Algorithm::ALL.to_vec());
            for report in &r.reports {
                assert!(is_valid_tour(report.tour.order(), r.cities));
            }
        }
    }

    #[test]
    fn test_increment_past_end_stops() {
        let points = random_points(10, 1, 100.0);
        let scaling = ScalingConfig::default()
            .with_start_cities(4)
            .with_increment(5)
            .with_max_runtime(Duration::from_secs(3600));
        let rounds = run_scaling(&points, &scaling, &euclidean()).expect("runs");
        let sizes: Vec<usize> = rounds.iter().map(|r| r.cities).collect();
        assert_eq!(sizes, vec![4, 9]);
    }

    #[test]
    fn test_zero_cutoff_stops_after_first_round() {
        let points = random_points(30, 5, 100.0);
        let scaling = ScalingConfig::default()
            .with_start_cities(5)
            .with_increment(5)
            .with_max_runtime(Duration::ZERO);
        let rounds = run_scaling(&points, &scaling, &euclidean()).expect("runs");
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].cities, 5);
    }

    #[test]
    fn test_exact_dropped_above_its_limit() {
        let points = random_points(12, 6, 100.0);
        let scaling = ScalingConfig::default()
            .with_start_cities(4)
            .with_increment(4)
            .with_max_runtime(Duration::from_secs(3600));
        let config = euclidean().with_held_karp(HeldKarpConfig::default().with_max_cities(8));
        let rounds = run_scaling(&points, &scaling, &config).expect("runs");
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[1].algorithms(), Algorithm::ALL.to_vec());
        assert_eq!(
            rounds[2].algorithms(),
            vec![Algorithm::Approx, Algorithm::Heuristic]
        );
    }

    #[test]
    fn test_only_refused_algorithm_ends_run() {
        let points = random_points(12, 6, 100.0);
        let scaling = ScalingConfig::default()
            .with_start_cities(4)
            .with_increment(4)
            .with_max_runtime(Duration::from_secs(3600));
        let config = euclidean()
            .with_algorithms(vec![Algorithm::Exact])
            .with_held_karp(HeldKarpConfig::default().with_max_cities(6));
        let rounds = run_scaling(&points, &scaling, &config).expect("runs");
        assert_eq!(rounds.len(), 1);
    }

    #[test]
    fn test_not_enough_points() {
        let points = random_points(3, 0, 10.0);
        let scaling = ScalingConfig::default().with_start_cities(5);
        assert!(matches!(
            run_scaling(&points, &scaling, &euclidean()),
            Err(TspError::InvalidConfig(_))
        ));
    }
}
