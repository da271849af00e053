use std::collections::BTreeSet;

use crate::cs::graph::Graph;

/// A vertex cover: a set of vertex indices, iterated in ascending order.
pub type Cover = BTreeSet<usize>;

/// Returns the first edge of `graph` (in normalized order) with neither
/// endpoint in `cover`, or `None` if the cover is valid.
pub fn find_uncovered_edge(graph: &Graph, cover: &Cover) -> Option<(usize, usize)> {
    graph
        .edges()
        .find(|(u, v)| !cover.contains(u) && !cover.contains(v))
}

/// Checks that every edge of `graph` has at least one endpoint in `cover`.
///
/// The offending edge, if any, is logged at `warn` level; use
/// [`find_uncovered_edge`] to get it programmatically.
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::{verify_cover, Cover};
/// use algos_approx::cs::graph::Graph;
///
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// assert!(verify_cover(&graph, &Cover::from([1])));
/// assert!(!verify_cover(&graph, &Cover::from([0])));
/// ```
pub fn verify_cover(graph: &Graph, cover: &Cover) -> bool {
    match find_uncovered_edge(graph, cover) {
        Some((u, v)) => {
            log::warn!("edge ({}, {}) is not covered", u, v);
            false
        }
        None => true,
    }
}
