//! Fixed-capacity vertex directory.
//!
//! Slot indices are the vertex identities shared with the adjacency matrix.
//! A slot keeps its index for as long as its client lives; freed slots are
//! handed out again lowest-first.

use waypost_core::{Client, CAPACITY};

use crate::error::{GraphError, Result};

/// Slot array of optional clients plus an incrementally maintained count.
#[derive(Debug, Clone)]
pub struct VertexDirectory {
    slots: [Option<Client>; CAPACITY],
    /// Always equal to the number of `Some` slots.
    live_count: usize,
}

impl VertexDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            live_count: 0,
        }
    }

    /// Lowest-indexed empty slot, or `None` when the directory is full.
    pub fn find_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Slot of the client with exactly this name and neighborhood.
    pub fn find_by_identity(&self, name: &str, neighborhood: &str) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|client| client.matches(name, neighborhood))
        })
    }

    /// Place `client` in the lowest free slot and return that slot.
    pub(crate) fn insert(&mut self, client: Client) -> Result<usize> {
        let index = self
            .find_free_slot()
            .ok_or(GraphError::CapacityExceeded { capacity: CAPACITY })?;

        if self
            .find_by_identity(client.name(), client.neighborhood())
            .is_some()
        {
            return Err(GraphError::DuplicateClient {
                name: client.name().to_string(),
                neighborhood: client.neighborhood().to_string(),
            });
        }

        self.slots[index] = Some(client);
        self.live_count += 1;
        Ok(index)
    }

    /// Empty slot `index` and hand back its client.
    ///
    /// Only `ClientGraph` calls this, after clearing the matching matrix row
    /// and column.
    pub(crate) fn take(&mut self, index: usize) -> Result<Client> {
        let client = self
            .slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(GraphError::NotFound { index })?;
        self.live_count -= 1;
        Ok(client)
    }

    /// Client at `index`, if the slot is occupied.
    pub fn get(&self, index: usize) -> Option<&Client> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Client at `index`, or `NotFound`.
    pub fn describe(&self, index: usize) -> Result<&Client> {
        self.get(index).ok_or(GraphError::NotFound { index })
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Occupied slots in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Client)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|client| (i, client)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.live_count
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    pub fn is_full(&self) -> bool {
        self.live_count == CAPACITY
    }
}

impl Default for VertexDirectory {
    fn default() -> Self {
        Self::new()
    }
}
