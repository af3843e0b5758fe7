//! Read operations for the client graph.

use serde::{Deserialize, Serialize};

use waypost_core::CAPACITY;

use crate::error::{GraphError, Result};
use crate::graph::ClientGraph;
use crate::matrix::NO_EDGE;

/// A single directed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

/// Occupancy summary of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub capacity: usize,
    pub client_count: usize,
    pub free_slots: usize,
    /// Directed paths; a bidirectional path counts twice.
    pub edge_count: usize,
}

/// Outgoing paths of one slot in ascending target order.
///
/// Cloning yields an iterator positioned where the original was, so a
/// fresh clone taken before iterating can replay the sequence.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    row: Option<&'a [u32; CAPACITY]>,
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.row?;
        while self.next < CAPACITY {
            let to = self.next;
            self.next += 1;
            if row[to] != NO_EDGE {
                return Some((to, row[to]));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.row {
            Some(_) => (0, Some(CAPACITY - self.next)),
            None => (0, Some(0)),
        }
    }
}

impl ClientGraph {
    /// Weight of `from -> to`, `0` when there is no such path.
    pub fn weight(&self, from: usize, to: usize) -> u32 {
        self.matrix.get(from, to)
    }

    /// Every `(to, weight)` with a path `of -> to`; empty for an unknown slot.
    pub fn neighbors(&self, of: usize) -> Neighbors<'_> {
        Neighbors {
            row: self.matrix.row(of),
            next: 0,
        }
    }

    /// All directed paths, ordered by source then target slot.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..CAPACITY).flat_map(move |from| {
            self.neighbors(from)
                .map(move |(to, weight)| Edge { from, to, weight })
        })
    }

    /// Number of directed paths.
    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }

    pub fn stats(&self) -> GraphStats {
        let client_count = self.client_count();
        GraphStats {
            capacity: CAPACITY,
            client_count,
            free_slots: CAPACITY - client_count,
            edge_count: self.edge_count(),
        }
    }

    /// Slot of a registered client, or `UnknownClient`.
    pub fn resolve(&self, name: &str, neighborhood: &str) -> Result<usize> {
        self.find_by_identity(name, neighborhood)
            .ok_or_else(|| GraphError::UnknownClient {
                name: name.to_string(),
                neighborhood: neighborhood.to_string(),
            })
    }
}
