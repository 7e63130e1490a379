//! Exact TSP solving.
//!
//! - [`solve_exact`] — Held-Karp bitmask dynamic programming, O(n²·2ⁿ)

mod config;
mod held_karp;

pub use config::{HeldKarpConfig, MAX_EXACT_CITIES};
pub use held_karp::{solve_exact, solve_exact_with, solve_exact_with_cancel};
