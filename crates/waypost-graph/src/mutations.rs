//! Path mutations on the client graph.
//!
//! Every operation validates fully before writing, so a failed call leaves
//! the matrix untouched.

use waypost_core::Client;

use crate::error::{GraphError, Result};
use crate::graph::ClientGraph;
use crate::matrix::NO_EDGE;

impl ClientGraph {
    // ── Slot-addressed ───────────────────────────────────────────

    /// Create the path `from -> to` with `weight`.
    ///
    /// With `bidirectional`, also writes `to -> from` with the same weight.
    /// Only the forward cell is checked for an existing path; the reverse
    /// cell is overwritten whatever it held.
    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: i64,
        bidirectional: bool,
    ) -> Result<()> {
        self.check_endpoint(from)?;
        self.check_endpoint(to)?;
        if from == to {
            return Err(GraphError::SameVertex { index: from });
        }
        let weight = checked_weight(weight)?;

        let existing = self.matrix.get(from, to);
        if existing != NO_EDGE {
            return Err(GraphError::EdgeExists {
                from,
                to,
                weight: existing,
            });
        }

        self.matrix.set(from, to, weight);
        if bidirectional {
            self.matrix.set(to, from, weight);
        }
        tracing::debug!(from, to, weight, bidirectional, "Path added");
        Ok(())
    }

    /// Remove the single directed path `from -> to`.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_endpoint(from)?;
        self.check_endpoint(to)?;
        if self.matrix.get(from, to) == NO_EDGE {
            return Err(GraphError::NoSuchEdge { from, to });
        }

        self.matrix.set(from, to, NO_EDGE);
        tracing::debug!(from, to, "Path removed");
        Ok(())
    }

    // ── Identity-addressed ───────────────────────────────────────

    /// [`ClientGraph::add_edge`] between two clients named by identity.
    ///
    /// Returns the resolved `(from, to)` slots.
    pub fn add_path_between(
        &mut self,
        from: (&str, &str),
        to: (&str, &str),
        weight: i64,
        bidirectional: bool,
    ) -> Result<(usize, usize)> {
        let from = self.resolve(from.0, from.1)?;
        let to = self.resolve(to.0, to.1)?;
        self.add_edge(from, to, weight, bidirectional)?;
        Ok((from, to))
    }

    /// [`ClientGraph::remove_edge`] between two clients named by identity.
    pub fn remove_path_between(
        &mut self,
        from: (&str, &str),
        to: (&str, &str),
    ) -> Result<(usize, usize)> {
        let from = self.resolve(from.0, from.1)?;
        let to = self.resolve(to.0, to.1)?;
        self.remove_edge(from, to)?;
        Ok((from, to))
    }

    /// Remove a client named by identity, returning its former slot.
    pub fn remove_client_by_identity(
        &mut self,
        name: &str,
        neighborhood: &str,
    ) -> Result<(usize, Client)> {
        let index = self.resolve(name, neighborhood)?;
        let client = self.remove_client(index)?;
        Ok((index, client))
    }

    fn check_endpoint(&self, index: usize) -> Result<()> {
        if self.directory.is_occupied(index) {
            Ok(())
        } else {
            Err(GraphError::InvalidEndpoint { index })
        }
    }
}

/// Accept only weights in `1..=u32::MAX`; zero is reserved for "no path".
fn checked_weight(weight: i64) -> Result<u32> {
    if weight <= 0 {
        return Err(GraphError::NonPositiveWeight { weight });
    }
    u32::try_from(weight).map_err(|_| GraphError::WeightOutOfRange {
        weight,
        max: u32::MAX,
    })
}
