//! Scripted sessions: replay a JSON request through a fresh engine.
//!
//! Individual rejections are collected as failures; the run always
//! finishes and reports the final state.

use crate::error::{PathfindError, Result};
use crate::types::{BatchFailure, BatchRequest, BatchResult, PlacedClient};
use crate::PathfindEngine;

impl PathfindEngine {
    /// Apply `request` in order: clients, paths, path removals, client
    /// removals, then the optional query.
    pub fn run_batch(&mut self, request: &BatchRequest) -> BatchResult {
        let mut placed = Vec::new();
        let mut failures = Vec::new();

        for client in &request.clients {
            match self
                .graph_mut()
                .add_client(client.name(), client.neighborhood())
            {
                Ok(slot) => placed.push(PlacedClient {
                    slot,
                    client: client.clone(),
                }),
                Err(e) => failures.push(failure(format!("add client {client}"), e)),
            }
        }

        for path in &request.paths {
            let outcome = self.graph_mut().add_path_between(
                (path.from.name(), path.from.neighborhood()),
                (path.to.name(), path.to.neighborhood()),
                path.weight,
                path.bidirectional,
            );
            if let Err(e) = outcome {
                failures.push(failure(
                    format!("add path {} -> {}", path.from, path.to),
                    e,
                ));
            }
        }

        for removal in &request.remove_paths {
            let outcome = self.graph_mut().remove_path_between(
                (removal.from.name(), removal.from.neighborhood()),
                (removal.to.name(), removal.to.neighborhood()),
            );
            if let Err(e) = outcome {
                failures.push(failure(
                    format!("remove path {} -> {}", removal.from, removal.to),
                    e,
                ));
            }
        }

        for client in &request.remove_clients {
            let outcome = self
                .graph_mut()
                .remove_client_by_identity(client.name(), client.neighborhood());
            if let Err(e) = outcome {
                failures.push(failure(format!("remove client {client}"), e));
            }
        }

        let shortest_paths = request.start.as_ref().and_then(|start| {
            match self.report_from(start.name(), start.neighborhood()) {
                Ok(report) => Some(report),
                Err(e) => {
                    failures.push(failure(format!("shortest paths from {start}"), e));
                    None
                }
            }
        });

        tracing::info!(
            placed = placed.len(),
            failures = failures.len(),
            "Batch run finished"
        );

        BatchResult {
            placed,
            failures,
            stats: self.graph().stats(),
            shortest_paths,
        }
    }
}

/// Parse a JSON `BatchRequest`, run it on a fresh engine, and return the
/// JSON `BatchResult`.
pub fn run_json(input: &str) -> Result<String> {
    let request: BatchRequest =
        serde_json::from_str(input).map_err(|e| PathfindError::Serialization(e.to_string()))?;
    let result = PathfindEngine::new().run_batch(&request);
    serde_json::to_string(&result).map_err(|e| PathfindError::Serialization(e.to_string()))
}

fn failure(operation: String, error: impl std::fmt::Display) -> BatchFailure {
    tracing::debug!(%operation, %error, "Batch operation rejected");
    BatchFailure {
        operation,
        error: error.to_string(),
    }
}
