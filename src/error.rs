//! Error types shared by every algorithm in the crate.

use thiserror::Error;

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or solving a problem instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge refers to a vertex outside `0..vertex_count`, or both
    /// endpoints are the same vertex.
    #[error("invalid edge ({u}, {v}) for a graph with {vertex_count} vertices")]
    InvalidVertex {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The instance has no feasible solution.
    #[error("infeasible instance: {0}")]
    Infeasible(String),

    /// An algorithm returned a cover that misses an edge. This is a defect in
    /// the algorithm, not in its input.
    #[error("{algorithm} cover misses edge ({u}, {v}) in trial {trial}")]
    InvalidCover {
        algorithm: &'static str,
        trial: usize,
        u: usize,
        v: usize,
    },
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn infeasible<S: Into<String>>(msg: S) -> Self {
        Error::Infeasible(msg.into())
    }
}
