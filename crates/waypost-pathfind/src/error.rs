//! Error types for the waypost-pathfind crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathfindError {
    #[error("Graph error: {0}")]
    Graph(#[from] waypost_graph::GraphError),

    /// The start is an empty slot, an out-of-range slot, or an unregistered
    /// identity.
    #[error("Start is not a registered client: {start}")]
    InvalidStart { start: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PathfindError>;
