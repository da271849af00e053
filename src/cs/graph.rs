//! Undirected simple graph used by the cover algorithms.
//!
//! Vertices are the integers `0..vertex_count`. Edges are stored as
//! normalized pairs `(u, v)` with `u < v`, so each edge has exactly one
//! representation. The edge set is ordered, which makes [`Graph::pick_edge`]
//! deterministic: it always yields the smallest remaining pair.

pub mod random;

pub use random::generate_random_graph;

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: BTreeSet::new(),
        }
    }

    /// Builds a graph from a list of edges, failing on the first invalid one.
    ///
    /// # Examples
    /// ```
    /// use algos_approx::cs::graph::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
    /// assert_eq!(graph.edge_count(), 3);
    /// ```
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts the undirected edge `{u, v}`. Inserting an existing edge is a no-op.
    ///
    /// # Errors
    /// * `InvalidVertex` if either endpoint is out of range or `u == v`
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if u >= self.vertex_count || v >= self.vertex_count || u == v {
            return Err(Error::InvalidVertex {
                u,
                v,
                vertex_count: self.vertex_count,
            });
        }
        self.edges.insert(normalize(u, v));
        Ok(())
    }

    /// Removes the edge `{u, v}` if present and reports whether it was.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        self.edges.remove(&normalize(u, v))
    }

    /// Removes every edge with `v` as an endpoint, returning how many went.
    pub fn remove_incident_edges(&mut self, v: usize) -> usize {
        let before = self.edges.len();
        self.edges.retain(|&(a, b)| a != v && b != v);
        before - self.edges.len()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.edges.contains(&normalize(u, v))
    }

    /// Returns the smallest remaining edge, or `None` once the graph is empty.
    pub fn pick_edge(&self) -> Option<(usize, usize)> {
        self.edges.first().copied()
    }

    /// Iterates over the edges in normalized, ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Degree of `v` in the current edge set. O(E).
    pub fn degree_of(&self, v: usize) -> usize {
        self.edges.iter().filter(|&&(a, b)| a == v || b == v).count()
    }

    /// Degrees of all vertices, indexed by vertex. O(V + E).
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count];
        for &(u, v) in &self.edges {
            degrees[u] += 1;
            degrees[v] += 1;
        }
        degrees
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph({} vertices, {} edges)",
            self.vertex_count,
            self.edges.len()
        )
    }
}

fn normalize(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}
