//! Held-Karp dynamic programming over city subsets.
//!
//! # Algorithm
//!
//! City 0 is fixed as the start. For every subset `S` of the remaining
//! cities and every `k ∈ S`, `C(S, k)` is the cheapest path that leaves
//! city 0, visits exactly `S`, and ends at `k`:
//!
//! ```text
//! C({k}, k) = d(0, k)
//! C(S, k)   = min over m ∈ S \ {k} of C(S \ {k}, m) + d(m, k)
//! OPT       = min over k of C({1..n-1}, k) + d(k, 0)
//! ```
//!
//! Subsets are processed in order of increasing size, so every state a
//! transition reads is already final. The optimal tour is recovered by
//! following predecessor links back from the best final state.
//!
//! # Complexity
//!
//! O(n²·2ⁿ) time and O(n·2ⁿ) memory. Practical only for a few tens of cities.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of SIAM* 10(1), 196-210.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::HeldKarpConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Solves the TSP exactly with the default [`HeldKarpConfig`].
///
/// The returned tour starts and ends at city 0. Ties are broken towards
/// the lowest city index, so identical matrices always give identical tours.
///
/// # Errors
///
/// Returns [`TspError::TooFewPoints`] for fewer than two cities and
/// [`TspError::TooManyCities`] above the subset mask width.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{DistanceMatrix, Metric};
/// use u_tsp::exact::solve_exact;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 0.0, 1.0),
///     Point::new(2, 1.0, 1.0),
///     Point::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Metric::Euclidean).unwrap();
/// let tour = solve_exact(&dm).unwrap();
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// assert_eq!(tour.order(), &[0, 3, 2, 1, 0]);
/// ```
pub fn solve_exact(distances: &DistanceMatrix) -> Result<Tour> {
    solve_exact_with_cancel(distances, &HeldKarpConfig::default(), None)
}

/// Solves the TSP exactly under the given configuration.
pub fn solve_exact_with(distances: &DistanceMatrix, config: &HeldKarpConfig) -> Result<Tour> {
    solve_exact_with_cancel(distances, config, None)
}

/// Solves the TSP exactly, checking `cancel` before each subset size.
///
/// # Errors
///
/// In addition to the errors of [`solve_exact`], returns
/// [`TspError::Cancelled`] once the flag is observed set.
pub fn solve_exact_with_cancel(
    distances: &DistanceMatrix,
    config: &HeldKarpConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Tour> {
    config.validate()?;
    let n = distances.size();
    if n < 2 {
        return Err(TspError::TooFewPoints(n));
    }
    if n > config.max_cities {
        return Err(TspError::TooManyCities {
            n,
            max: config.max_cities,
        });
    }
    log::debug!("held_karp: start n={n}");

    let table = DpTable::build(distances, |size| {
        let stop = cancel
            .as_deref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        if stop {
            log::debug!("held_karp: cancelled at subset size {size}");
        }
        stop
    })?;
    let (optimum, last) = table.best_closing(distances);
    let order = table.reconstruct(last);
    let length = tour_length(&order, distances);
    debug_assert!((length - optimum).abs() <= 1e-9 * optimum.max(1.0));

    log::debug!("held_karp: done n={n} length={length}");
    Ok(Tour::new(order, length))
}

/// Bit representing non-start city `city` (1-based) in a subset mask.
fn bit(city: usize) -> usize {
    1 << (city - 1)
}

/// Cities contained in `mask`, in ascending order.
fn cities(mask: usize) -> impl Iterator<Item = usize> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let city = rest.trailing_zeros() as usize + 1;
        rest &= rest - 1;
        Some(city)
    })
}

/// Next larger mask with the same number of set bits (Gosper's hack).
fn next_same_size(mask: usize) -> usize {
    let lowest = mask & mask.wrapping_neg();
    let ripple = mask + lowest;
    (((ripple ^ mask) >> 2) / lowest) | ripple
}

/// DP state table scoped to a single solve.
///
/// Cell `(subset, k)` holds the cheapest cost of reaching `k` having visited
/// exactly `subset`, and the city visited just before `k`.
struct DpTable {
    width: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
}

impl DpTable {
    fn new(width: usize) -> Self {
        let cells = (1usize << width).saturating_mul(width);
        Self {
            width,
            cost: vec![f64::INFINITY; cells],
            parent: vec![0; cells],
        }
    }

    fn index(&self, subset: usize, city: usize) -> usize {
        subset * self.width + (city - 1)
    }

    fn cost(&self, subset: usize, city: usize) -> f64 {
        self.cost[self.index(subset, city)]
    }

    fn parent(&self, subset: usize, city: usize) -> usize {
        self.parent[self.index(subset, city)] as usize
    }

    fn set(&mut self, subset: usize, city: usize, cost: f64, parent: usize) {
        let idx = self.index(subset, city);
        self.cost[idx] = cost;
        self.parent[idx] = parent as u8;
    }

    fn full(&self) -> usize {
        (1usize << self.width) - 1
    }

    /// Fills the table layer by layer, asking `stop` once before each
    /// subset size from 2 upwards.
    fn build(distances: &DistanceMatrix, mut stop: impl FnMut(usize) -> bool) -> Result<Self> {
        let n = distances.size();
        let width = n - 1;
        let mut table = Self::new(width);

        for k in 1..n {
            table.set(bit(k), k, distances.get(0, k), 0);
        }

        let limit = 1usize << width;
        for size in 2..=width {
            if stop(size) {
                return Err(TspError::Cancelled);
            }

            let mut subset = (1usize << size) - 1;
            while subset < limit {
                for k in cities(subset) {
                    let prev = subset & !bit(k);
                    let mut best = f64::INFINITY;
                    let mut best_parent = 0;
                    for m in cities(prev) {
                        let c = table.cost(prev, m) + distances.get(m, k);
                        if c < best {
                            best = c;
                            best_parent = m;
                        }
                    }
                    table.set(subset, k, best, best_parent);
                }
                subset = next_same_size(subset);
            }
            log::trace!("held_karp: subset size {size}/{width} done");
        }
        Ok(table)
    }

    /// Cheapest way to close the tour over all cities: `(length, last city)`.
    fn best_closing(&self, distances: &DistanceMatrix) -> (f64, usize) {
        let full = self.full();
        let mut best = (f64::INFINITY, 1);
        for k in 1..=self.width {
            let c = self.cost(full, k) + distances.get(k, 0);
            if c < best.0 {
                best = (c, k);
            }
        }
        best
    }

    /// Follows predecessor links from `(full, last)` back to the start.
    fn reconstruct(&self, last: usize) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.width + 2);
        let mut subset = self.full();
        let mut city = last;
        while subset != 0 {
            order.push(city);
            let parent = self.parent(subset, city);
            subset &= !bit(city);
            city = parent;
        }
        assert_eq!(city, 0, "held_karp: predecessor chain must end at the start city");
        order.push(0);
        order.reverse();
        order.push(0);
        order
    }
}
