//! Closed tours.

use serde::{Deserialize, Serialize};

use super::Point;

/// A closed tour over the rows of a distance matrix, with its total length.
///
/// `order` holds matrix indices (positions in the input point list, not
/// point identifiers) and repeats the start city at the end, so a tour over
/// `n` cities has `n + 1` entries.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12.5);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.cities(), &[0, 2, 1]);
/// assert_eq!(tour.start(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour from a closed visiting order and its length.
    pub fn new(order: Vec<usize>, length: f64) -> Self {
        Self { order, length }
    }

    /// The closed visiting order (start repeated at the end).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total length including the closing edge.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The visiting order without the closing repeat.
    pub fn cities(&self) -> &[usize] {
        match self.order.split_last() {
            Some((last, rest)) if !rest.is_empty() && rest[0] == *last => rest,
            _ => &self.order,
        }
    }

    /// Number of distinct cities visited.
    pub fn len(&self) -> usize {
        self.cities().len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First city of the tour.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Maps the closed order back to the identifiers of `points`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `points`.
    pub fn point_ids(&self, points: &[Point]) -> Vec<usize> {
        self.order.iter().map(|&i| points[i].id()).collect()
    }
}
