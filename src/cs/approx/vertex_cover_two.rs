use crate::cs::approx::cover::Cover;
use crate::cs::graph::Graph;

/// Computes a maximal matching by repeatedly taking an uncovered edge and
/// discarding every edge that touches either of its endpoints.
///
/// No two returned edges share an endpoint, and every edge of `graph` shares
/// an endpoint with at least one returned edge.
pub fn maximal_matching(graph: &Graph) -> Vec<(usize, usize)> {
    let mut working = graph.clone();
    let mut matching = Vec::new();

    while let Some((u, v)) = working.pick_edge() {
        let removed = working.remove_incident_edges(u) + working.remove_incident_edges(v);
        log::debug!(
            "matched edge ({}, {}), removed {} incident edges",
            u,
            v,
            removed
        );
        matching.push((u, v));
    }

    matching
}

/// Implements the 2-approximation algorithm for the Vertex Cover problem.
///
/// Both endpoints of every edge in a maximal matching are added to the
/// cover. Any cover must contain at least one endpoint of each matched edge,
/// and matched edges are disjoint, so for a matching of `k` edges the optimum
/// is at least `k` while this cover has exactly `2k` vertices.
///
/// The bound is tight: on a star graph the optimum is the center alone, but
/// the algorithm returns the center plus one leaf.
///
/// The input graph is never modified; the algorithm works on its own clone.
///
/// # Arguments
///
/// * `graph` - The input graph
///
/// # Returns
///
/// * The vertices of a cover of size at most `2 * OPT`
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::{two_approx_vertex_cover, verify_cover};
/// use algos_approx::cs::graph::Graph;
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
/// let cover = two_approx_vertex_cover(&graph);
/// assert!(verify_cover(&graph, &cover));
/// assert!(cover.len() <= 4);
/// ```
///
/// # Complexity
/// * Time: O(k * E) where k is the size of the matching
/// * Space: O(V + E)
pub fn two_approx_vertex_cover(graph: &Graph) -> Cover {
    let mut vertex_cover = Cover::new();
    for (u, v) in maximal_matching(graph) {
        vertex_cover.insert(u);
        vertex_cover.insert(v);
    }

    log::debug!(
        "2-approximation cover has {} vertices for {}",
        vertex_cover.len(),
        graph
    );
    vertex_cover
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::approx::cover::verify_cover;

    #[test]
    fn test_path_graph() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();

        let cover = two_approx_vertex_cover(&graph);

        // Optimal cover is {1, 2}
        assert!(cover.len() >= 2 && cover.len() <= 4);
        assert!(verify_cover(&graph, &cover));
    }

    #[test]
    fn test_star_graph_is_tight() {
        // Center 0 with leaves 1..4
        let graph = Graph::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();

        let cover = two_approx_vertex_cover(&graph);

        // Optimal is {0}; one matched edge puts the center and a leaf in the cover
        assert_eq!(cover.len(), 2);
        assert!(cover.contains(&0));
        assert!(verify_cover(&graph, &cover));
    }

    #[test]
    fn test_complete_graph_k4() {
        let mut graph = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                graph.add_edge(i, j).unwrap();
            }
        }

        let cover = two_approx_vertex_cover(&graph);

        // Optimal is 3; a perfect matching of K4 has two edges
        assert!(cover.len() <= 6);
        assert_eq!(cover.len(), 4);
        assert!(verify_cover(&graph, &cover));
    }

    #[test]
    fn test_matching_edges_are_disjoint() {
        let graph = Graph::from_edges(
            7,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (0, 6), (1, 4)],
        )
        .unwrap();

        let matching = maximal_matching(&graph);

        let mut seen = Cover::new();
        for &(u, v) in &matching {
            assert!(graph.contains_edge(u, v));
            assert!(seen.insert(u), "vertex {} matched twice", u);
            assert!(seen.insert(v), "vertex {} matched twice", v);
        }
        assert_eq!(two_approx_vertex_cover(&graph), seen);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(5);
        assert!(two_approx_vertex_cover(&graph).is_empty());
        assert!(maximal_matching(&graph).is_empty());
    }

    #[test]
    fn test_input_graph_is_not_mutated() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        let before: Vec<_> = graph.edges().collect();

        let first = two_approx_vertex_cover(&graph);
        let second = two_approx_vertex_cover(&graph);

        assert_eq!(graph.edges().collect::<Vec<_>>(), before);
        assert_eq!(first.len(), second.len());
        assert!(verify_cover(&graph, &first));
        assert!(verify_cover(&graph, &second));
    }
}
