use crate::cs::approx::cover::Cover;
use crate::cs::graph::Graph;

/// Greedy vertex cover heuristic: repeatedly take the vertex of highest
/// remaining degree.
///
/// Degrees are recomputed from the working graph each round. Among vertices
/// of equal maximum degree the lowest index wins, so the result is
/// reproducible.
///
/// This is a heuristic only. There is no constant approximation factor;
/// adversarial bipartite inputs force a ratio of Θ(log n). On many graphs it
/// still beats [`two_approx_vertex_cover`](super::two_approx_vertex_cover),
/// and on a star it finds the optimum.
///
/// # Complexity
/// * Time: O(V * (V + E))
/// * Space: O(V + E)
pub fn greedy_degree_vertex_cover(graph: &Graph) -> Cover {
    let mut working = graph.clone();
    let mut vertex_cover = Cover::new();

    while working.has_edges() {
        let degrees = working.degrees();
        let Some((best, degree)) = max_degree_vertex(&degrees) else {
            break;
        };

        log::debug!("selected vertex {} with degree {}", best, degree);
        vertex_cover.insert(best);
        working.remove_incident_edges(best);
    }

    vertex_cover
}

/// Lowest-indexed vertex of maximum positive degree.
fn max_degree_vertex(degrees: &[usize]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (v, &d) in degrees.iter().enumerate() {
        if d > 0 && best.map_or(true, |(_, bd)| d > bd) {
            best = Some((v, d));
        }
    }
    best
}
