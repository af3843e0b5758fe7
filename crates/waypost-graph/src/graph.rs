//! The combined directory + matrix owned as one value.

use waypost_core::Client;

use crate::directory::VertexDirectory;
use crate::error::Result;
use crate::matrix::AdjacencyMatrix;

/// Client registry with weighted paths between clients.
///
/// Slot indices returned by [`ClientGraph::add_client`] address both the
/// directory and the matrix. Holds no locks; wrap the whole value in a single
/// mutex if it ever has to be shared.
#[derive(Debug, Clone, Default)]
pub struct ClientGraph {
    pub(crate) directory: VertexDirectory,
    pub(crate) matrix: AdjacencyMatrix,
}

impl ClientGraph {
    /// An empty graph with a zero-filled matrix.
    pub fn new() -> Self {
        Self {
            directory: VertexDirectory::new(),
            matrix: AdjacencyMatrix::new(),
        }
    }

    /// Register a client in the lowest free slot.
    pub fn add_client(&mut self, name: &str, neighborhood: &str) -> Result<usize> {
        let client = Client::new(name, neighborhood)?;
        let index = self.directory.insert(client)?;
        tracing::debug!(index, name, neighborhood, "Client added");
        Ok(index)
    }

    /// Remove the client at `index`, dropping every path into or out of it.
    pub fn remove_client(&mut self, index: usize) -> Result<Client> {
        self.directory.describe(index)?;
        self.matrix.clear_vertex(index);
        let client = self.directory.take(index)?;
        tracing::debug!(index, client = %client, "Client removed");
        Ok(client)
    }

    /// Lowest free slot, or `None` when full.
    pub fn find_free_slot(&self) -> Option<usize> {
        self.directory.find_free_slot()
    }

    /// Slot of the client with this exact identity.
    pub fn find_by_identity(&self, name: &str, neighborhood: &str) -> Option<usize> {
        self.directory.find_by_identity(name, neighborhood)
    }

    /// Client at `index`, or `NotFound`.
    pub fn describe(&self, index: usize) -> Result<&Client> {
        self.directory.describe(index)
    }

    /// Client at `index`, if any.
    pub fn client(&self, index: usize) -> Option<&Client> {
        self.directory.get(index)
    }

    /// Occupied slots in ascending order.
    pub fn clients(&self) -> impl Iterator<Item = (usize, &Client)> + '_ {
        self.directory.iter()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.directory.is_occupied(index)
    }

    /// Number of registered clients.
    pub fn client_count(&self) -> usize {
        self.directory.len()
    }

    pub fn directory(&self) -> &VertexDirectory {
        &self.directory
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}
