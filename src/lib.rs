pub mod cs;
pub mod error;

pub use cs::{approx, graph};
pub use error::{Error, Result};
