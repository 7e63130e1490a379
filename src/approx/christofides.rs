//! Christofides-style tour construction.
//!
//! # Algorithm
//!
//! 1. Minimum spanning tree `T` (Kruskal).
//! 2. Odd-degree vertices `O` of `T`; `|O|` is even.
//! 3. Perfect matching `M` over `O`.
//! 4. Multigraph `T ∪ M`, in which every degree is even.
//! 5. Eulerian circuit of `T ∪ M` from city 0 (Hierholzer).
//! 6. Shortcut repeated vertices to a Hamiltonian tour.
//!
//! With a minimum-weight `M` and a metric cost matrix the tour is at most
//! 1.5× optimal: `w(T) ≤ OPT`, `w(M) ≤ OPT / 2`, and shortcutting never
//! lengthens a walk under the triangle inequality.
//!
//! # Complexity
//!
//! O(n² log n) for the tree plus the matching cost: O(2ᵏ·k) for the exact
//! matching over `k` odd vertices, O(k²) for greedy.
//!
//! # Reference
//!
//! Christofides, N. (1976). "Worst-case analysis of a new heuristic for the
//! travelling salesman problem", Report 388, Carnegie-Mellon University.

use super::config::ApproxConfig;
use super::euler::{eulerian_circuit, shortcut, Multigraph};
use super::matching::min_weight_matching;
use super::mst::{minimum_spanning_tree, odd_degree_vertices};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Builds an approximate tour with the default [`ApproxConfig`].
///
/// The default uses an exact minimum-weight matching while the odd vertex
/// set is small enough, preserving the 1.5× bound for metric matrices.
///
/// # Errors
///
/// Returns [`TspError::TooFewPoints`] for fewer than two cities.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{DistanceMatrix, Metric};
/// use u_tsp::approx::solve_approx;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 0.0, 1.0),
///     Point::new(2, 1.0, 1.0),
///     Point::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Metric::Euclidean).unwrap();
/// let tour = solve_approx(&dm).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!(tour.length() <= 1.5 * 4.0 + 1e-10);
/// ```
pub fn solve_approx(distances: &DistanceMatrix) -> Result<Tour> {
    solve_approx_with(distances, &ApproxConfig::default())
}

/// Builds an approximate tour under the given configuration.
pub fn solve_approx_with(distances: &DistanceMatrix, config: &ApproxConfig) -> Result<Tour> {
    config.validate()?;
    let n = distances.size();
    if n < 2 {
        return Err(TspError::TooFewPoints(n));
    }
    log::debug!("christofides: start n={n} matching={:?}", config.matching);

    let tree = minimum_spanning_tree(distances);
    let odd = odd_degree_vertices(n, &tree);
    let matching = min_weight_matching(&odd, distances, config);
    log::trace!(
        "christofides: tree_edges={} odd={} matching_edges={}",
        tree.len(),
        odd.len(),
        matching.len()
    );

    let graph = Multigraph::from_edges(n, [tree.as_slice(), matching.as_slice()]);
    let circuit = eulerian_circuit(graph, 0);
    let order = shortcut(&circuit, n);
    let length = tour_length(&order, distances);

    log::debug!("christofides: done n={n} length={length}");
    Ok(Tour::new(order, length))
}
