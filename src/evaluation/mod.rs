//! Tour evaluation.
//!
//! [`tour_length`] is the single length definition used by every solver, so
//! their results are directly comparable.

mod length;

pub use length::{is_valid_tour, tour_length};
