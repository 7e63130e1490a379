//! Multigraph union, Eulerian circuit, and shortcutting.

use std::collections::BTreeMap;

use super::Edge;

/// Undirected multigraph stored as per-vertex adjacency multisets.
///
/// `adjacency[v][w]` is the number of parallel `v`–`w` edges. Consuming an
/// edge decrements both endpoints' counts, so an edge is used exactly once.
#[derive(Debug, Clone)]
pub struct Multigraph {
    adjacency: Vec<BTreeMap<usize, usize>>,
    edges: usize,
}

impl Multigraph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); n],
            edges: 0,
        }
    }

    /// Builds the union of several edge lists, keeping parallel edges.
    pub fn from_edges<'a>(n: usize, lists: impl IntoIterator<Item = &'a [Edge]>) -> Self {
        let mut graph = Self::new(n);
        for list in lists {
            for e in list {
                graph.add_edge(e.u, e.v);
            }
        }
        graph
    }

    /// Adds one `u`–`v` edge.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert_ne!(u, v, "self loops are not expected");
        *self.adjacency[u].entry(v).or_insert(0) += 1;
        *self.adjacency[v].entry(u).or_insert(0) += 1;
        self.edges += 1;
    }

    /// Removes one `u`–`v` edge, returning `false` if none is left.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !Self::decrement(&mut self.adjacency[u], v) {
            return false;
        }
        let mirrored = Self::decrement(&mut self.adjacency[v], u);
        assert!(mirrored, "adjacency multisets out of sync at {u}-{v}");
        self.edges -= 1;
        true
    }

    /// Removes and returns the lowest-numbered neighbor edge of `v`.
    pub fn take_edge(&mut self, v: usize) -> Option<usize> {
        let w = *self.adjacency[v].keys().next()?;
        self.remove_edge(v, w);
        Some(w)
    }

    /// Degree of `v`, counting parallel edges.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].values().sum()
    }

    /// Number of edges not yet consumed.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn decrement(neighbors: &mut BTreeMap<usize, usize>, w: usize) -> bool {
        match neighbors.get_mut(&w) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                neighbors.remove(&w);
                true
            }
            None => false,
        }
    }
}

/// Hierholzer's Eulerian circuit, consuming every edge of `graph`.
///
/// The walk follows unused edges from `start`; when it gets stuck the vertex
/// is emitted and the walk resumes from the latest vertex on the stack that
/// still has unused edges, which splices that sub-circuit into the result.
/// The returned vertex sequence starts and ends at `start` and has
/// `edge_count + 1` entries.
///
/// # Panics
///
/// Panics if a vertex has odd degree, or if edges remain unreached (the
/// graph is disconnected).
///
/// # Examples
///
/// ```
/// use u_tsp::approx::{eulerian_circuit, Multigraph};
///
/// // Two triangles sharing vertex 0.
/// let mut g = Multigraph::new(5);
/// for (u, v) in [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)] {
///     g.add_edge(u, v);
/// }
/// let circuit = eulerian_circuit(g, 0);
/// assert_eq!(circuit.len(), 7);
/// assert_eq!(circuit.first(), Some(&0));
/// assert_eq!(circuit.last(), Some(&0));
/// ```
pub fn eulerian_circuit(mut graph: Multigraph, start: usize) -> Vec<usize> {
    for v in 0..graph.num_vertices() {
        assert!(
            graph.degree(v) % 2 == 0,
            "vertex {v} has odd degree {}",
            graph.degree(v)
        );
    }
    let total = graph.edge_count();
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(total + 1);
    while let Some(&v) = stack.last() {
        match graph.take_edge(v) {
            Some(w) => stack.push(w),
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }
    assert!(
        graph.edge_count() == 0 && circuit.len() == total + 1,
        "eulerian circuit left {} of {total} edges unused",
        graph.edge_count()
    );
    circuit.reverse();
    circuit
}

/// Keeps the first occurrence of each vertex of `circuit` and returns to the start.
///
/// # Panics
///
/// Panics if the circuit does not visit all `n` vertices.
pub fn shortcut(circuit: &[usize], n: usize) -> Vec<usize> {
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n + 1);
    for &v in circuit {
        if !visited[v] {
            visited[v] = true;
            order.push(v);
        }
    }
    assert_eq!(order.len(), n, "circuit must visit every vertex");
    order.push(order[0]);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks that consecutive circuit vertices use each input edge exactly once.
    fn assert_uses_edges(circuit: &[usize], edges: &[(usize, usize)]) {
        let mut remaining: Vec<(usize, usize)> =
            edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        for w in circuit.windows(2) {
            let key = (w[0].min(w[1]), w[0].max(w[1]));
            let pos = remaining
                .iter()
                .position(|&e| e == key)
                .expect("circuit edge must be unused");
            remaining.swap_remove(pos);
        }
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_multigraph_parallel_edges() {
        let mut g = Multigraph::new(2);
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.edge_count(), 2);
        assert!(g.remove_edge(0, 1));
        assert_eq!(g.degree(1), 1);
        assert!(g.remove_edge(1, 0));
        assert!(!g.remove_edge(0, 1));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_take_edge_lowest_neighbor() {
        let mut g = Multigraph::new(4);
        g.add_edge(0, 3);
        g.add_edge(0, 2);
        assert_eq!(g.take_edge(0), Some(2));
        assert_eq!(g.take_edge(0), Some(3));
        assert_eq!(g.take_edge(0), None);
    }

    #[test]
    fn test_from_edges_union() {
        let tree = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
        let matching = [Edge::new(0, 2, 2.0)];
        let g = Multigraph::from_edges(3, [&tree[..], &matching[..]]);
        assert_eq!(g.edge_count(), 3);
        for v in 0..3 {
            assert_eq!(g.degree(v), 2);
        }
    }

    #[test]
    fn test_circuit_requires_splice() {
        // A walk from 0 taking lowest neighbors goes 0-1-2-0 and gets stuck;
        // the 0-3-4-0 loop has to be spliced in.
        let edges = [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)];
        let mut g = Multigraph::new(5);
        for &(u, v) in &edges {
            g.add_edge(u, v);
        }
        let circuit = eulerian_circuit(g, 0);
        assert_eq!(circuit.len(), 7);
        assert_eq!(circuit[0], 0);
        assert_eq!(circuit[6], 0);
        assert_uses_edges(&circuit, &edges);
    }

    #[test]
    fn test_circuit_mid_walk_splice() {
        // Loop 1-3-4-1 hangs off vertex 1 of the outer cycle 0-1-2-0.
        let edges = [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 1)];
        let mut g = Multigraph::new(5);
        for &(u, v) in &edges {
            g.add_edge(u, v);
        }
        let circuit = eulerian_circuit(g, 2);
        assert_eq!(circuit.first(), Some(&2));
        assert_eq!(circuit.last(), Some(&2));
        assert_uses_edges(&circuit, &edges);
    }

    #[test]
    fn test_circuit_double_edge() {
        let mut g = Multigraph::new(2);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(eulerian_circuit(g, 0), vec![0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "odd degree")]
    fn test_circuit_rejects_odd_degree() {
        let mut g = Multigraph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        eulerian_circuit(g, 0);
    }

    #[test]
    #[should_panic(expected = "unused")]
    fn test_circuit_rejects_disconnected() {
        let mut g = Multigraph::new(4);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        g.add_edge(2, 3);
        eulerian_circuit(g, 0);
    }

    #[test]
    fn test_shortcut() {
        let circuit = [0, 1, 2, 0, 3, 4, 0];
        assert_eq!(shortcut(&circuit, 5), vec![0, 1, 2, 3, 4, 0]);
    }
}
