//! waypost-pathfind: Shortest-path queries over the Waypost client graph.
//!
//! Owns a `ClientGraph`, runs dense Dijkstra from a chosen client and turns
//! the raw distances and predecessor links into client-level routes. Also
//! hosts the interactive menu and the JSON batch runner used by the
//! `waypost` binary.

pub mod algorithms;
pub mod batch;
pub mod error;
pub mod menu;
pub mod render;
pub mod types;

pub use algorithms::{shortest_paths, Route, ShortestPaths, UNREACHABLE};
pub use error::PathfindError;
pub use types::{BatchRequest, BatchResult, RouteReport, ShortestPathReport};

use std::time::Instant;

use chrono::Utc;
use waypost_graph::ClientGraph;

/// The client registry together with its shortest-path queries.
#[derive(Debug, Default)]
pub struct PathfindEngine {
    graph: ClientGraph,
}

impl PathfindEngine {
    /// Create an engine over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: ClientGraph::new(),
        }
    }

    /// Create an engine over an existing graph.
    pub fn with_graph(graph: ClientGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &ClientGraph {
        &self.graph
    }

    /// Mutable access for client and path changes.
    pub fn graph_mut(&mut self) -> &mut ClientGraph {
        &mut self.graph
    }

    /// Raw shortest-path state from slot `start`.
    pub fn shortest_paths(&self, start: usize) -> error::Result<ShortestPaths> {
        algorithms::shortest_paths(&self.graph, start)
    }

    /// Shortest routes from the client with this identity.
    pub fn report_from(&self, name: &str, neighborhood: &str) -> error::Result<ShortestPathReport> {
        let start = self
            .graph
            .find_by_identity(name, neighborhood)
            .ok_or_else(|| PathfindError::InvalidStart {
                start: format!("{name} ({neighborhood})"),
            })?;
        self.report_from_slot(start)
    }

    /// Shortest routes from slot `start`, with every hop resolved to its client.
    pub fn report_from_slot(&self, start: usize) -> error::Result<ShortestPathReport> {
        let timer = Instant::now();
        let raw = self.shortest_paths(start)?;

        let start_client = self.graph.describe(raw.start)?.clone();
        let routes = raw
            .routes
            .iter()
            .map(|route| self.route_report(route))
            .collect::<error::Result<Vec<_>>>()?;

        let computation_us = timer.elapsed().as_micros() as u64;
        tracing::info!(
            start,
            reachable = routes.len(),
            computation_us,
            "Shortest paths computed"
        );

        Ok(ShortestPathReport {
            start,
            start_client,
            routes,
            computed_at: Utc::now(),
            computation_us,
        })
    }

    /// Resolve the slots of a raw route to client records.
    fn route_report(&self, route: &Route) -> error::Result<RouteReport> {
        let stops = route
            .path
            .iter()
            .map(|&slot| self.graph.describe(slot).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RouteReport {
            target: route.target,
            client: self.graph.describe(route.target)?.clone(),
            distance: route.distance,
            path: route.path.clone(),
            stops,
        })
    }
}
