//! Perfect matchings over the odd-degree vertices.

use super::config::{ApproxConfig, MatchingStrategy};
use super::Edge;
use crate::distance::DistanceMatrix;

/// Costs must drop by more than this for a pair exchange to be taken.
const EXCHANGE_EPS: f64 = 1e-10;

/// Pairs up `vertices` (an even-sized set) into a perfect matching.
///
/// With [`MatchingStrategy::Optimal`] and at most
/// `config.exact_matching_limit` vertices the result is a minimum-weight
/// perfect matching. Otherwise it is heuristic (see [`MatchingStrategy`]).
///
/// # Panics
///
/// Panics if `vertices` has odd length.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::approx::{min_weight_matching, ApproxConfig};
///
/// // Two tight pairs: {0, 1} and {2, 3}.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 9.0, 9.0,
///     1.0, 0.0, 9.0, 9.0,
///     9.0, 9.0, 0.0, 1.0,
///     9.0, 9.0, 1.0, 0.0,
/// ]).unwrap();
/// let m = min_weight_matching(&[0, 1, 2, 3], &dm, &ApproxConfig::default());
/// assert_eq!(m.len(), 2);
/// assert!((m.iter().map(|e| e.weight).sum::<f64>() - 2.0).abs() < 1e-10);
/// ```
pub fn min_weight_matching(
    vertices: &[usize],
    distances: &DistanceMatrix,
    config: &ApproxConfig,
) -> Vec<Edge> {
    assert!(
        vertices.len() % 2 == 0,
        "perfect matching needs an even vertex count, got {}",
        vertices.len()
    );
    let pairs = match config.matching {
        MatchingStrategy::Greedy => greedy_pairs(vertices, distances),
        MatchingStrategy::Optimal if vertices.len() <= config.exact_matching_limit => {
            optimal_pairs(vertices, distances)
        }
        MatchingStrategy::Optimal => {
            log::warn!(
                "matching: {} odd vertices exceed exact limit {}, using greedy with pair exchange",
                vertices.len(),
                config.exact_matching_limit
            );
            let mut pairs = greedy_pairs(vertices, distances);
            improve_by_exchange(&mut pairs, distances);
            pairs
        }
    };
    pairs
        .into_iter()
        .map(|(u, v)| Edge::new(u, v, distances.get(u, v)))
        .collect()
}

/// Pops the last unmatched vertex and pairs it with its nearest unmatched one.
fn greedy_pairs(vertices: &[usize], distances: &DistanceMatrix) -> Vec<(usize, usize)> {
    let mut remaining = vertices.to_vec();
    let mut pairs = Vec::with_capacity(vertices.len() / 2);
    while let Some(v) = remaining.pop() {
        let u = distances
            .nearest_neighbor(v, &remaining)
            .expect("even vertex count leaves a partner");
        remaining.retain(|&c| c != u);
        pairs.push((v, u));
    }
    pairs
}

/// Exact minimum-weight perfect matching by DP over matched-vertex subsets.
///
/// Each step matches the lowest unmatched vertex, so every subset is reached
/// through a single canonical order. O(2ᵏ·k) time, O(2ᵏ) memory.
fn optimal_pairs(vertices: &[usize], distances: &DistanceMatrix) -> Vec<(usize, usize)> {
    let k = vertices.len();
    if k == 0 {
        return Vec::new();
    }
    let full = (1usize << k) - 1;
    let mut cost = vec![f64::INFINITY; full + 1];
    let mut chosen = vec![(0u8, 0u8); full + 1];
    cost[0] = 0.0;

    for mask in 0..full {
        let base = cost[mask];
        if base == f64::INFINITY {
            continue;
        }
        let i = (!mask).trailing_zeros() as usize;
        for j in (i + 1)..k {
            if mask & (1 << j) != 0 {
                continue;
            }
            let next = mask | (1 << i) | (1 << j);
            let c = base + distances.get(vertices[i], vertices[j]);
            if c < cost[next] {
                cost[next] = c;
                chosen[next] = (i as u8, j as u8);
            }
        }
    }

    let mut pairs = Vec::with_capacity(k / 2);
    let mut mask = full;
    while mask != 0 {
        let (i, j) = chosen[mask];
        let (i, j) = (i as usize, j as usize);
        pairs.push((vertices[i], vertices[j]));
        mask &= !((1 << i) | (1 << j));
    }
    pairs
}

/// Re-pairs two matched edges whenever that lowers their combined cost,
/// until no exchange helps.
fn improve_by_exchange(pairs: &mut [(usize, usize)], distances: &DistanceMatrix) {
    let d = |a: usize, b: usize| distances.get(a, b);
    let mut improved = true;
    while improved {
        improved = false;
        for a in 0..pairs.len() {
            for b in (a + 1)..pairs.len() {
                let (p, q) = pairs[a];
                let (r, s) = pairs[b];
                let current = d(p, q) + d(r, s);
                let crossed = d(p, r) + d(q, s);
                let swapped = d(p, s) + d(q, r);
                if crossed <= swapped && crossed < current - EXCHANGE_EPS {
                    pairs[a] = (p, r);
                    pairs[b] = (q, s);
                    improved = true;
                } else if swapped < current - EXCHANGE_EPS {
                    pairs[a] = (p, s);
                    pairs[b] = (q, r);
                    improved = true;
                }
            }
        }
    }
}
