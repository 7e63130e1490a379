//! Dense symmetric cost matrix.

use std::collections::HashSet;

use super::Metric;
use crate::error::{Result, TspError};
use crate::models::Point;

/// Largest difference allowed between `d(i, j)` and `d(j, i)` in an explicit matrix.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense n×n cost matrix stored in row-major order.
///
/// Row `i` corresponds to the `i`-th point of the list the matrix was built
/// from, not to that point's identifier.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{DistanceMatrix, Metric};
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 3.0, 4.0),
///     Point::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Metric::Euclidean).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds the cost matrix for `points` under `metric`.
    ///
    /// Only the upper triangle is computed; it is mirrored into the lower one.
    ///
    /// # Errors
    ///
    /// - [`TspError::TooFewPoints`] if fewer than two points are given
    /// - [`TspError::DuplicateId`] if two points share an identifier
    /// - [`TspError::NonFiniteCoordinate`] if a coordinate is NaN or infinite
    pub fn from_points(points: &[Point], metric: Metric) -> Result<Self> {
        let n = points.len();
        if n < 2 {
            return Err(TspError::TooFewPoints(n));
        }
        let mut seen = HashSet::with_capacity(n);
        for p in points {
            if !p.is_finite() {
                return Err(TspError::NonFiniteCoordinate {
                    id: p.id(),
                    x: p.x(),
                    y: p.y(),
                });
            }
            if !seen.insert(p.id()) {
                return Err(TspError::DuplicateId(p.id()));
            }
        }

        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        log::debug!("distance.from_points: built n={n} metric={metric:?}");
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// The grid need not satisfy the triangle inequality, but every entry
    /// must be finite and non-negative and the grid must be symmetric.
    ///
    /// # Errors
    ///
    /// - [`TspError::MatrixShape`] if the data length doesn't match `size * size`
    /// - [`TspError::InvalidDistance`] for a negative or non-finite entry
    /// - [`TspError::AsymmetricDistance`] if `d(i, j)` and `d(j, i)` differ by
    ///   more than [`SYMMETRY_TOLERANCE`]
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TspError::MatrixShape {
                expected: size * size,
                actual: data.len(),
            });
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::InvalidDistance {
                from: pos / size,
                to: pos % size,
                value: data[pos],
            });
        }
        let dm = Self { data, size };
        dm.ensure_symmetric()?;
        Ok(dm)
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the first `(i, j)` with `i < j` whose mirrored entries differ
    /// by more than `tol`, or `None` if the matrix is symmetric.
    pub fn asymmetric_entry(&self, tol: f64) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Fails with [`TspError::AsymmetricDistance`] unless the matrix is
    /// symmetric within [`SYMMETRY_TOLERANCE`].
    pub(crate) fn ensure_symmetric(&self) -> Result<()> {
        match self.asymmetric_entry(SYMMETRY_TOLERANCE) {
            Some((from, to)) => Err(TspError::AsymmetricDistance {
                from,
                to,
                forward: self.get(from, to),
                backward: self.get(to, from),
            }),
            None => Ok(()),
        }
    }

    /// Returns `true` if `d(i, k) <= d(i, j) + d(j, k) + tol` for every triple.
    ///
    /// O(n³); intended for validating explicit matrices before relying on
    /// the approximation bound.
    pub fn satisfies_triangle_inequality(&self, tol: f64) -> bool {
        let n = self.size;
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    if self.get(i, k) > self.get(i, j) + self.get(j, k) + tol {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
