//! Approximate TSP solving with a worst-case guarantee.
//!
//! - [`solve_approx`] — Christofides-style MST + matching + Eulerian shortcut
//!
//! The building blocks are public so each step can be used and tested alone:
//! [`UnionFind`], [`minimum_spanning_tree`], [`odd_degree_vertices`],
//! [`min_weight_matching`], [`Multigraph`], [`eulerian_circuit`], [`shortcut`].

mod christofides;
mod config;
mod euler;
mod matching;
mod mst;
mod union_find;

pub use christofides::{solve_approx, solve_approx_with};
pub use config::{ApproxConfig, MatchingStrategy, MAX_EXACT_MATCHING_LIMIT};
pub use euler::{eulerian_circuit, shortcut, Multigraph};
pub use matching::min_weight_matching;
pub use mst::{minimum_spanning_tree, odd_degree_vertices, Edge};
pub use union_find::UnionFind;
