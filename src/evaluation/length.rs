//! Tour length and validity checks shared by all solvers.

use crate::distance::DistanceMatrix;

/// Total length of a cyclic tour.
///
/// Sums consecutive edge costs plus the wrap-around edge from the last index
/// back to the first. An order that already repeats its start at the end is
/// not closed a second time, so closed and open orders give the same result.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{DistanceMatrix, Metric};
/// use u_tsp::evaluation::tour_length;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 0.0, 1.0),
///     Point::new(2, 1.0, 1.0),
///     Point::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Metric::Euclidean).unwrap();
/// assert!((tour_length(&[0, 1, 2, 3, 0], &dm) - 4.0).abs() < 1e-10);
/// assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let path: f64 = tour
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();
    if first == last {
        path
    } else {
        path + distances.get(last, first)
    }
}

/// Returns `true` if `tour` visits every index in `0..n` exactly once,
/// optionally repeating its start at the end.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    let cities = match tour.split_last() {
        Some((last, rest)) if tour.len() == n + 1 && rest.first() == Some(last) => rest,
        _ => tour,
    };
    if cities.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &c in cities {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}
