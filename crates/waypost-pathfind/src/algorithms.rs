//! Single-source shortest paths over the dense adjacency matrix.
//!
//! Plain O(V²) Dijkstra: with a fixed ten-slot directory a linear scan for
//! the closest unvisited vertex beats any heap.

use serde::Serialize;

use waypost_core::CAPACITY;
use waypost_graph::ClientGraph;

use crate::error::{PathfindError, Result};

/// Distance sentinel for "not reached". Larger than any real sum, since at
/// most `CAPACITY - 1` weights of at most `u32::MAX` are ever added.
pub const UNREACHABLE: u64 = u64::MAX;

/// Best route from the start to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub target: usize,
    pub distance: u64,
    /// Slots from the start to `target`, both included.
    pub path: Vec<usize>,
}

/// Full output of one shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: usize,
    /// `UNREACHABLE` for every slot the run never reached.
    pub distances: [u64; CAPACITY],
    pub predecessors: [Option<usize>; CAPACITY],
    /// Reachable occupied slots other than the start, ascending by slot.
    pub routes: Vec<Route>,
}

impl ShortestPaths {
    pub fn route_to(&self, target: usize) -> Option<&Route> {
        self.routes.iter().find(|route| route.target == target)
    }

    pub fn distance_to(&self, target: usize) -> Option<u64> {
        self.distances
            .get(target)
            .copied()
            .filter(|&d| d != UNREACHABLE)
    }
}

/// Shortest paths from `start` to every client reachable from it.
///
/// Ties on distance go to the lower slot, and a distance only changes on a
/// strict improvement, so results are deterministic.
pub fn shortest_paths(graph: &ClientGraph, start: usize) -> Result<ShortestPaths> {
    if !graph.is_occupied(start) {
        return Err(PathfindError::InvalidStart {
            start: format!("slot {start}"),
        });
    }

    let mut distances = [UNREACHABLE; CAPACITY];
    let mut predecessors: [Option<usize>; CAPACITY] = [None; CAPACITY];
    let mut visited = [false; CAPACITY];
    distances[start] = 0;

    for _ in 0..CAPACITY - 1 {
        // Nothing left within reach.
        let Some(u) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[u] = true;

        for (v, weight) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = distances[u] + u64::from(weight);
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
            }
        }
    }

    let routes = (0..CAPACITY)
        .filter(|&v| v != start && graph.is_occupied(v) && distances[v] != UNREACHABLE)
        .map(|v| Route {
            target: v,
            distance: distances[v],
            path: reconstruct(&predecessors, start, v),
        })
        .collect();

    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
        routes,
    })
}

/// First unvisited slot holding the smallest finite distance.
fn closest_unvisited(distances: &[u64; CAPACITY], visited: &[bool; CAPACITY]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for v in 0..CAPACITY {
        if visited[v] || distances[v] == UNREACHABLE {
            continue;
        }
        if best.map_or(true, |b| distances[v] < distances[b]) {
            best = Some(v);
        }
    }
    best
}

/// Walk predecessors back from `target` and reverse into start-first order.
fn reconstruct(predecessors: &[Option<usize>; CAPACITY], start: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(parent) = predecessors[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    debug_assert_eq!(path.first(), Some(&start));
    path
}
