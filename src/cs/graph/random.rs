use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::graph::Graph;
use crate::error::{Error, Result};

/// Generates an Erdős–Rényi random graph G(n, p).
///
/// Every pair `u < v` becomes an edge independently with probability
/// `density`. The same `(vertex_count, density, seed)` always yields the
/// same graph, on every platform.
///
/// # Errors
/// * `InvalidInput` if `density` is NaN or outside `[0, 1]`
///
/// # Examples
/// ```
/// use algos_approx::cs::graph::generate_random_graph;
///
/// let a = generate_random_graph(10, 0.3, 7).unwrap();
/// let b = generate_random_graph(10, 0.3, 7).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_random_graph(vertex_count: usize, density: f64, seed: u64) -> Result<Graph> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::invalid_input(format!(
            "edge density must be within [0, 1], got {density}"
        )));
    }

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut graph = Graph::new(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.gen_bool(density) {
                graph.add_edge(u, v)?;
            }
        }
    }

    log::debug!("generated {} with seed {}", graph, seed);
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_graph() {
        let a = generate_random_graph(20, 0.4, 123).unwrap();
        let b = generate_random_graph(20, 0.4, 123).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_extremes() {
        let empty = generate_random_graph(8, 0.0, 1).unwrap();
        assert!(!empty.has_edges());

        let complete = generate_random_graph(8, 1.0, 1).unwrap();
        assert_eq!(complete.edge_count(), 8 * 7 / 2);
    }

    #[test]
    fn test_invalid_density() {
        assert!(matches!(
            generate_random_graph(5, 1.5, 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(generate_random_graph(5, -0.1, 0).is_err());
        assert!(generate_random_graph(5, f64::NAN, 0).is_err());
    }

    #[test]
    fn test_zero_vertices() {
        let graph = generate_random_graph(0, 0.5, 9).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert!(!graph.has_edges());
    }
}
