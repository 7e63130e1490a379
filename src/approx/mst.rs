//! Minimum spanning tree and odd-degree vertices.

use super::UnionFind;
use crate::distance::DistanceMatrix;

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Edge cost.
    pub weight: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }
}

/// Kruskal's minimum spanning tree over the complete graph of `distances`.
///
/// Edges `(i, j)` with `i < j` are enumerated row by row and stably sorted
/// by weight, so equal-weight edges are taken in that order.
///
/// # Complexity
///
/// O(n² log n).
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::approx::minimum_spanning_tree;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 5.0,
///     1.0, 0.0, 2.0,
///     5.0, 2.0, 0.0,
/// ]).unwrap();
/// let tree = minimum_spanning_tree(&dm);
/// assert_eq!(tree.len(), 2);
/// assert!((tree.iter().map(|e| e.weight).sum::<f64>() - 3.0).abs() < 1e-10);
/// ```
pub fn minimum_spanning_tree(distances: &DistanceMatrix) -> Vec<Edge> {
    let n = distances.size();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge::new(i, j, distances.get(i, j)));
        }
    }
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut forest = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for edge in edges {
        if forest.union(edge.u, edge.v) {
            tree.push(edge);
            if forest.num_sets() == 1 {
                break;
            }
        }
    }
    tree
}

/// Vertices of odd degree in `edges`, in ascending order.
///
/// # Panics
///
/// Panics if the count is odd, which the handshake lemma rules out.
pub fn odd_degree_vertices(n: usize, edges: &[Edge]) -> Vec<usize> {
    let mut degree = vec![0usize; n];
    for e in edges {
        degree[e.u] += 1;
        degree[e.v] += 1;
    }
    let odd: Vec<usize> = (0..n).filter(|&v| degree[v] % 2 == 1).collect();
    assert!(
        odd.len() % 2 == 0,
        "odd-degree vertex count must be even, got {}",
        odd.len()
    );
    odd
}
