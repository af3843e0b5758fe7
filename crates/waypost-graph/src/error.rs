//! Error types for the waypost-graph crate.

use thiserror::Error;

use waypost_core::CoreError;

/// Errors from directory and edge operations.
///
/// Every failed operation leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Directory full: all {capacity} slots are occupied")]
    CapacityExceeded { capacity: usize },

    #[error("Client already registered: {name} ({neighborhood})")]
    DuplicateClient { name: String, neighborhood: String },

    #[error("No client at slot {index}")]
    NotFound { index: usize },

    #[error("Slot {index} is not an occupied client slot")]
    InvalidEndpoint { index: usize },

    #[error("Cannot connect slot {index} to itself")]
    SameVertex { index: usize },

    #[error("Path weight must be positive, got {weight}")]
    NonPositiveWeight { weight: i64 },

    #[error("Path weight {weight} exceeds the maximum of {max}")]
    WeightOutOfRange { weight: i64, max: u32 },

    #[error("Path {from} -> {to} already exists with weight {weight}")]
    EdgeExists { from: usize, to: usize, weight: u32 },

    #[error("No path {from} -> {to}")]
    NoSuchEdge { from: usize, to: usize },

    #[error("Client not registered: {name} ({neighborhood})")]
    UnknownClient { name: String, neighborhood: String },

    #[error("Invalid client: {0}")]
    Field(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
