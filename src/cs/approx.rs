//! Approximation algorithms for NP-hard optimization problems.
//!
//! This module provides polynomial-time algorithms with provable (or, where
//! noted, merely empirical) quality relative to the optimum:
//! - Vertex cover: maximal-matching 2-approximation and the degree-greedy heuristic
//! - Set cover: greedy H(n)-approximation, unweighted and weighted
//! - Metric TSP: MST preorder-walk 2-approximation
//! - Bin packing: Next Fit, First Fit, First Fit Decreasing
//! - 0/1 knapsack: density greedy and the modified 2-approximate greedy
//! - Makespan scheduling: list scheduling and LPT
//!
//! # Examples
//!
//! ```rust
//! use algos_approx::cs::approx::{
//!     greedy_degree_vertex_cover, two_approx_vertex_cover, verify_cover,
//! };
//! use algos_approx::cs::graph::Graph;
//!
//! let graph = Graph::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
//!
//! let matching_cover = two_approx_vertex_cover(&graph);
//! let greedy_cover = greedy_degree_vertex_cover(&graph);
//!
//! assert!(verify_cover(&graph, &matching_cover));
//! assert_eq!(greedy_cover.len(), 1);
//! ```

pub mod bin_packing;
pub mod cover;
pub mod experiment;
pub mod greedy_set_cover;
pub mod greedy_vertex_cover;
pub mod knapsack_greedy;
pub mod load_balancing;
pub mod tsp_mst;
pub mod vertex_cover_two;


pub use bin_packing::{first_fit, first_fit_decreasing, next_fit, Bin, FIT_TOLERANCE};
pub use cover::{find_uncovered_edge, verify_cover, Cover};
pub use experiment::{run_experiment, CoverStats, ExperimentConfig, ExperimentReport};
pub use greedy_set_cover::{greedy_set_cover, greedy_weighted_set_cover, SetCoverInstance};
pub use greedy_vertex_cover::greedy_degree_vertex_cover;
pub use knapsack_greedy::{knapsack_greedy, knapsack_greedy_best_single, Item, KnapsackSolution};
pub use load_balancing::{list_scheduling, lpt_scheduling, Schedule};
pub use tsp_mst::{tsp_mst_approx, TspTour};
pub use vertex_cover_two::{maximal_matching, two_approx_vertex_cover};
