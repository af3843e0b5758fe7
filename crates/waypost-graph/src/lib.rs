//! Waypost Graph — the client registry engine.
//!
//! A fixed-capacity vertex directory and a directed weighted adjacency
//! matrix sharing one index space. `ClientGraph` owns both halves and is the
//! single mutation point, so a removed client can never leave edges behind.

pub mod directory;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod mutations;
pub mod queries;

pub use error::GraphError;
pub use graph::ClientGraph;
pub use queries::{Edge, GraphStats, Neighbors};
