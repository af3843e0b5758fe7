//! Request and response types for pathfinding and batch runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use waypost_core::Client;
use waypost_graph::GraphStats;

/// One route with every hop resolved to its client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteReport {
    pub target: usize,
    pub client: Client,
    pub distance: u64,
    /// Slots from the start to the target, both included.
    pub path: Vec<usize>,
    /// Clients along `path`, in the same order.
    pub stops: Vec<Client>,
}

/// Result of a shortest-path query from one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathReport {
    pub start: usize,
    pub start_client: Client,
    /// Reachable clients only, ascending by slot.
    pub routes: Vec<RouteReport>,
    pub computed_at: DateTime<Utc>,
    pub computation_us: u64,
}

/// A path to create, naming both ends by identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRequest {
    pub from: Client,
    pub to: Client,
    pub weight: i64,
    /// Also create the reverse path (default: false).
    #[serde(default)]
    pub bidirectional: bool,
}

/// A scripted session: register clients, then paths, then optionally query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub paths: Vec<PathRequest>,
    /// Paths to remove after creation, one direction each.
    #[serde(default)]
    pub remove_paths: Vec<PathRemoval>,
    /// Clients to remove after path changes.
    #[serde(default)]
    pub remove_clients: Vec<Client>,
    /// Run a shortest-path query from this client at the end.
    pub start: Option<Client>,
}

/// A single directed path to remove.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRemoval {
    pub from: Client,
    pub to: Client,
}

/// A client registered during a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedClient {
    pub slot: usize,
    pub client: Client,
}

/// An operation of a batch run that was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchFailure {
    pub operation: String,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub placed: Vec<PlacedClient>,
    pub failures: Vec<BatchFailure>,
    pub stats: GraphStats,
    pub shortest_paths: Option<ShortestPathReport>,
}
