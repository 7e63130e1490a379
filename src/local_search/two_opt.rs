//! 2-opt local search over a closed tour.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j`, reversing `tour[i..=j]` replaces the
//! edges `(prev(i), tour[i])` and `(tour[j], next(j))` with
//! `(prev(i), tour[j])` and `(tour[i], next(j))`:
//!
//! ```text
//! delta = d(prev_i, t[j]) + d(t[i], next_j) - d(prev_i, t[i]) - d(t[j], next_j)
//! ```
//!
//! If delta < 0, reverse the segment immediately and continue scanning
//! (first-improvement). Passes repeat until one makes no change. Reversing
//! the whole tour (`i = 0, j = n - 1`) leaves the cycle unchanged and is skipped.
//!
//! # Complexity
//!
//! O(n²) per pass. The number of passes is finite but not polynomially bounded.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::config::TwoOptConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Improves the identity tour `0, 1, …, n-1` to a 2-opt local optimum.
///
/// The returned tour is closed and never longer than the identity tour.
///
/// # Errors
///
/// Returns [`TspError::TooFewPoints`] for fewer than two cities and
/// [`TspError::AsymmetricDistance`] if the matrix is not symmetric, since
/// the move delta is only exact for symmetric costs.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{DistanceMatrix, Metric};
/// use u_tsp::local_search::solve_heuristic;
///
/// // Identity order 0→1→2→3 crosses itself.
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 1.0, 1.0),
///     Point::new(2, 0.0, 1.0),
///     Point::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Metric::Euclidean).unwrap();
/// let tour = solve_heuristic(&dm).unwrap();
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
pub fn solve_heuristic(distances: &DistanceMatrix) -> Result<Tour> {
    solve_heuristic_with(distances, &TwoOptConfig::default())
}

/// Runs 2-opt from the identity tour under the given configuration.
pub fn solve_heuristic_with(distances: &DistanceMatrix, config: &TwoOptConfig) -> Result<Tour> {
    config.validate()?;
    let n = distances.size();
    if n < 2 {
        return Err(TspError::TooFewPoints(n));
    }
    distances.ensure_symmetric()?;
    log::debug!("two_opt: start n={n}");

    let identity: Vec<usize> = (0..n).collect();
    let mut order = two_opt_improve(&identity, distances, config);
    order.push(order[0]);
    let length = tour_length(&order, distances);

    log::debug!("two_opt: done n={n} length={length}");
    Ok(Tour::new(order, length))
}

/// Applies first-improvement 2-opt to an open cyclic order.
///
/// Returns the improved order (same cities, no closing repeat). `distances`
/// must be symmetric: on asymmetric costs an accepted move can lengthen the
/// tour and the passes need not terminate unless `max_passes` is set.
pub fn two_opt_improve(
    tour: &[usize],
    distances: &DistanceMatrix,
    config: &TwoOptConfig,
) -> Vec<usize> {
    let mut current = tour.to_vec();
    let n = current.len();
    if n < 4 {
        return current;
    }

    let mut passes = 0;
    loop {
        if config.max_passes > 0 && passes >= config.max_passes {
            break;
        }
        passes += 1;

        let mut moves = 0usize;
        for i in 0..n - 1 {
            for j in i + 1..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if two_opt_delta(&current, distances, i, j) < -config.tolerance {
                    current[i..=j].reverse();
                    moves += 1;
                }
            }
        }
        log::trace!("two_opt: pass {passes} moves={moves}");
        if moves == 0 {
            break;
        }
    }
    current
}

/// Computes the length change from reversing `tour[i..=j]` in a cyclic tour.
///
/// Before: ...-prev_i - tour[i] - ... - tour[j] - next_j-...
/// After:  ...-prev_i - tour[j] - ... - tour[i] - next_j-...
fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let prev_i = tour[(i + n - 1) % n];
    let next_j = tour[(j + 1) % n];

    let old_cost = distances.get(prev_i, tour[i]) + distances.get(tour[j], next_j);
    let new_cost = distances.get(prev_i, tour[j]) + distances.get(tour[i], next_j);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::evaluation::is_valid_tour;
    use crate::models::{random_points, Point};

    fn matrix(points: &[Point]) -> DistanceMatrix {
        DistanceMatrix::from_points(points, Metric::Euclidean).expect("valid")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let points = vec![
            Point::new(0, 0.0, 0.0),
            Point::new(1, 0.0, 1.0),
            Point::new(2, 1.0, 1.0),
            Point::new(3, 1.0, 0.0),
        ];
        let tour = solve_heuristic(&matrix(&points)).expect("solvable");
        assert_eq!(tour.order(), &[0, 1, 2, 3, 0]);
        assert!((tour.length() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_reverses_crossing() {
        let points = vec![
            Point::new(0, 0.0, 0.0),
            Point::new(1, 1.0, 1.0),
            Point::new(2, 0.0, 1.0),
            Point::new(3, 1.0, 0.0),
        ];
        let dm = matrix(&points);
        let identity = tour_length(&[0, 1, 2, 3], &dm);
        let tour = solve_heuristic(&dm).expect("solvable");
        assert!(is_valid_tour(tour.order(), 4));
        assert!(tour.length() < identity);
        assert!((tour.length() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_two_cities() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
        let tour = solve_heuristic(&dm).expect("solvable");
        assert_eq!(tour.order(), &[0, 1, 0]);
        assert!((tour.length() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        for seed in 0..5 {
            let dm = matrix(&random_points(30, seed, 100.0));
            let identity: Vec<usize> = (0..30).collect();
            let tour = solve_heuristic(&dm).expect("solvable");
            assert!(is_valid_tour(tour.order(), 30));
            assert!(tour.length() <= tour_length(&identity, &dm) + 1e-10);
            assert_eq!(tour.length(), tour_length(tour.order(), &dm));
        }
    }

    #[test]
    fn test_2opt_local_optimum() {
        let dm = matrix(&random_points(25, 3, 100.0));
        let tour = solve_heuristic(&dm).expect("solvable");
        let cities = tour.cities();
        let n = cities.len();
        for i in 0..n - 1 {
            for j in i + 1..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                assert!(two_opt_delta(cities, &dm, i, j) >= -1e-10);
            }
        }
    }

    #[test]
    fn test_2opt_max_passes() {
        let dm = matrix(&random_points(40, 6, 100.0));
        let identity: Vec<usize> = (0..40).collect();
        let one = two_opt_improve(&identity, &dm, &TwoOptConfig::default().with_max_passes(1));
        let full = two_opt_improve(&identity, &dm, &TwoOptConfig::default());
        assert!(tour_length(&full, &dm) <= tour_length(&one, &dm) + 1e-10);
        assert!(tour_length(&one, &dm) <= tour_length(&identity, &dm) + 1e-10);
    }

    #[test]
    fn test_delta_matches_recomputed_length() {
        let dm = matrix(&random_points(10, 12, 100.0));
        let tour: Vec<usize> = (0..10).collect();
        let before = tour_length(&tour, &dm);
        for (i, j) in [(0, 4), (2, 7), (1, 9), (3, 3 + 1)] {
            let mut swapped = tour.clone();
            swapped[i..=j].reverse();
            let delta = two_opt_delta(&tour, &dm, i, j);
            assert!((tour_length(&swapped, &dm) - before - delta).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let mut dm = matrix(&random_points(6, 7, 100.0));
        dm.set(2, 4, dm.get(4, 2) + 25.0);
        assert!(matches!(
            solve_heuristic(&dm),
            Err(TspError::AsymmetricDistance { from: 2, to: 4, .. })
        ));
    }

    #[test]
    fn test_rejects_single_city() {
        assert!(matches!(
            solve_heuristic(&DistanceMatrix::new(1)),
            Err(TspError::TooFewPoints(1))
        ));
    }
}
