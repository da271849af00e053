use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// A closed tour starting and ending at vertex 0, with its total length.
#[derive(Debug, Clone, PartialEq)]
pub struct TspTour<W> {
    pub tour: Vec<usize>,
    pub cost: W,
}

/// Implements the MST-based 2-approximation for metric TSP.
///
/// It works by:
/// 1. Computing a minimum spanning tree rooted at vertex 0 (Prim's algorithm)
/// 2. Walking the tree in preorder, visiting children in increasing index order
/// 3. Returning to vertex 0 to close the tour
///
/// Skipping already visited vertices is a shortcut of the doubled tree walk,
/// so under the triangle inequality the tour costs at most `2 * MST <= 2 * OPT`.
/// Non-metric matrices are accepted but lose the guarantee.
///
/// # Arguments
///
/// * `dist` - Square matrix where `dist[i][j]` is the distance from `i` to `j`
///
/// # Returns
///
/// * The tour as a vertex sequence (first and last element are 0) and its cost
///
/// # Errors
/// * `InvalidInput` if the matrix is not square or has a negative, NaN or
///   infinite entry
///
/// # Examples
/// ```
/// use algos_approx::cs::approx::tsp_mst_approx;
///
/// let dist = vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ];
/// let result = tsp_mst_approx(&dist).unwrap();
/// assert_eq!(result.tour, vec![0, 1, 2, 3, 0]);
/// assert_eq!(result.cost, 95.0);
/// ```
///
/// # Complexity
/// * Time: O(n²)
/// * Space: O(n)
pub fn tsp_mst_approx<W>(dist: &[Vec<W>]) -> Result<TspTour<W>>
where
    W: Float + Debug,
{
    validate_matrix(dist)?;

    let n = dist.len();
    if n == 0 {
        return Ok(TspTour {
            tour: Vec::new(),
            cost: W::zero(),
        });
    }

    let parent = prim_mst(dist);

    // Children lists come out sorted because v is visited in increasing order
    let mut children = vec![Vec::new(); n];
    for (v, p) in parent.iter().enumerate() {
        if let Some(p) = *p {
            children[p].push(v);
        }
    }

    let mut tour = preorder(&children);
    tour.push(0);

    let cost = tour
        .windows(2)
        .fold(W::zero(), |acc, pair| acc + dist[pair[0]][pair[1]]);

    log::debug!("MST tour over {} vertices costs {:?}", n, cost);
    Ok(TspTour { tour, cost })
}

fn validate_matrix<W: Float + Debug>(dist: &[Vec<W>]) -> Result<()> {
    let n = dist.len();
    for (i, row) in dist.iter().enumerate() {
        if row.len() != n {
            return Err(Error::invalid_input(format!(
                "distance matrix must be square: row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        if let Some(j) = row.iter().position(|d| !d.is_finite() || *d < W::zero()) {
            return Err(Error::invalid_input(format!(
                "distance ({}, {}) must be finite and non-negative, got {:?}",
                i, j, row[j]
            )));
        }
    }
    Ok(())
}

/// Dense Prim's algorithm rooted at 0. Returns each vertex's MST parent.
fn prim_mst<W: Float>(dist: &[Vec<W>]) -> Vec<Option<usize>> {
    let n = dist.len();
    let mut in_tree = vec![false; n];
    let mut key = vec![W::infinity(); n];
    let mut parent = vec![None; n];
    key[0] = W::zero();

    for _ in 0..n {
        // Closest vertex not yet in the tree; lowest index on ties
        let mut u = None;
        for v in 0..n {
            if !in_tree[v] && u.map_or(true, |best: usize| key[v] < key[best]) {
                u = Some(v);
            }
        }
        let Some(u) = u else {
            break;
        };
        in_tree[u] = true;

        for v in 0..n {
            if !in_tree[v] && dist[u][v] < key[v] {
                key[v] = dist[u][v];
                parent[v] = Some(u);
            }
        }
    }

    parent
}

fn preorder(children: &[Vec<usize>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len() + 1);
    let mut stack = vec![0];
    while let Some(u) = stack.pop() {
        order.push(u);
        stack.extend(children[u].iter().rev());
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn euclidean(points: &[(f64, f64)]) -> Vec<Vec<f64>> {
        points
            .iter()
            .map(|a| {
                points
                    .iter()
                    .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_reference_matrix() {
        let dist = vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ];

        let result = tsp_mst_approx(&dist).unwrap();

        assert_eq!(result.tour, vec![0, 1, 2, 3, 0]);
        assert_relative_eq!(result.cost, 95.0);
    }

    #[test]
    fn test_visits_every_vertex_once() {
        let points = [(0.0, 0.0), (3.0, 1.0), (1.0, 4.0), (5.0, 5.0), (2.0, 2.0), (6.0, 0.0)];
        let dist = euclidean(&points);

        let result = tsp_mst_approx(&dist).unwrap();

        assert_eq!(result.tour.len(), points.len() + 1);
        assert_eq!(result.tour.first(), Some(&0));
        assert_eq!(result.tour.last(), Some(&0));
        let mut inner = result.tour[..points.len()].to_vec();
        inner.sort_unstable();
        assert_eq!(inner, (0..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_cost_within_twice_mst_weight() {
        let points = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 1.5)];
        let dist = euclidean(&points);

        let result = tsp_mst_approx(&dist).unwrap();

        let parent = prim_mst(&dist);
        let mst_weight: f64 = parent
            .iter()
            .enumerate()
            .filter_map(|(v, p)| p.map(|p| dist[p][v]))
            .sum();
        assert!(result.cost <= 2.0 * mst_weight + 1e-9);
        assert!(result.cost >= mst_weight);
    }

    #[test]
    fn test_square_is_optimal() {
        let dist = euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);

        let result = tsp_mst_approx(&dist).unwrap();

        assert_eq!(result.tour, vec![0, 1, 2, 3, 0]);
        assert_relative_eq!(result.cost, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trivial_sizes() {
        let empty: Vec<Vec<f64>> = Vec::new();
        let result = tsp_mst_approx(&empty).unwrap();
        assert!(result.tour.is_empty());
        assert_eq!(result.cost, 0.0);

        let single = tsp_mst_approx(&[vec![0.0f32]]).unwrap();
        assert_eq!(single.tour, vec![0, 0]);
        assert_eq!(single.cost, 0.0);
    }

    #[test]
    fn test_invalid_matrices() {
        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(tsp_mst_approx(&ragged), Err(Error::InvalidInput(_))));

        let negative = vec![vec![0.0, -1.0], vec![-1.0, 0.0]];
        assert!(tsp_mst_approx(&negative).is_err());

        let nan = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        assert!(tsp_mst_approx(&nan).is_err());

        let unreachable = vec![vec![0.0, f64::INFINITY], vec![f64::INFINITY, 0.0]];
        assert!(tsp_mst_approx(&unreachable).is_err());
    }
}
