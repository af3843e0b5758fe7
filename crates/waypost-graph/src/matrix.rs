//! Directed weighted adjacency matrix.
//!
//! `cells[from][to]` holds the path weight from `from` to `to`; `0` means
//! there is no path. The table is zero-filled on construction.

use waypost_core::CAPACITY;

/// Weight value meaning "no path".
pub const NO_EDGE: u32 = 0;

/// `CAPACITY × CAPACITY` table of path weights indexed by directory slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    cells: [[u32; CAPACITY]; CAPACITY],
}

impl AdjacencyMatrix {
    /// A matrix with every cell set to `NO_EDGE`.
    pub fn new() -> Self {
        Self {
            cells: [[NO_EDGE; CAPACITY]; CAPACITY],
        }
    }

    /// Weight of `from -> to`; `NO_EDGE` when absent or out of range.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.cells
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(NO_EDGE)
    }

    /// Outgoing weights of `from`, one entry per slot.
    pub fn row(&self, from: usize) -> Option<&[u32; CAPACITY]> {
        self.cells.get(from)
    }

    /// Both indices must already be validated against the directory.
    pub(crate) fn set(&mut self, from: usize, to: usize, weight: u32) {
        self.cells[from][to] = weight;
    }

    /// Zero row `index` and column `index`.
    pub(crate) fn clear_vertex(&mut self, index: usize) {
        if index >= CAPACITY {
            return;
        }
        self.cells[index] = [NO_EDGE; CAPACITY];
        for row in self.cells.iter_mut() {
            row[index] = NO_EDGE;
        }
    }

    /// Number of non-zero cells.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&weight| weight != NO_EDGE)
            .count()
    }
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}
