//! Path search over a [`CampusGraph`].
//!
//! # Contract
//!
//! Every strategy maps `(graph, start, end)` to the ordered node ids of a
//! path from `start` to `end`, both inclusive.  The path is empty when `end`
//! is unreachable and `[start]` when `start == end`.  Isolated nodes and ids
//! without a node record are dead ends: an edge may lead to an unknown id,
//! but nothing leads out of one.
//!
//! | Strategy     | Guarantee                                  |
//! |--------------|--------------------------------------------|
//! | [`bfs`]      | fewest edges                               |
//! | [`dfs`]      | some path; depends on adjacency order      |
//! | [`dijkstra`] | least total weight (nonnegative weights)   |
//!
//! # Pluggability
//!
//! Callers that want to swap strategies without matching on [`Algorithm`] can
//! go through the [`PathFinder`] trait.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use ordered_float::OrderedFloat;
use rustc_hash::{FxHashMap, FxHashSet};

use cn_core::{Algorithm, NodeId};

use crate::graph::CampusGraph;

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path-search strategy.
pub trait PathFinder {
    /// Ordered node ids from `start` to `end` inclusive, or empty if no path
    /// exists.
    fn find_path(&self, graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId>;
}

/// Breadth-first search.  See [`bfs`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Bfs;

/// Depth-first search.  See [`dfs`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Dfs;

/// Dijkstra's weighted shortest path.  See [`dijkstra`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl PathFinder for Bfs {
    fn find_path(&self, graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
        bfs(graph, start, end)
    }
}

impl PathFinder for Dfs {
    fn find_path(&self, graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
        dfs(graph, start, end)
    }
}

impl PathFinder for Dijkstra {
    fn find_path(&self, graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
        dijkstra(graph, start, end)
    }
}

impl PathFinder for Algorithm {
    fn find_path(&self, graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
        search(graph, start, end, *self)
    }
}

/// Run the chosen strategy.
pub fn search(graph: &CampusGraph, start: NodeId, end: NodeId, algorithm: Algorithm) -> Vec<NodeId> {
    match algorithm {
        Algorithm::Bfs      => bfs(graph, start, end),
        Algorithm::Dfs      => dfs(graph, start, end),
        Algorithm::Dijkstra => dijkstra(graph, start, end),
    }
}

// ── Breadth-first ─────────────────────────────────────────────────────────────

/// Unweighted breadth-first search; the result has the fewest edges.
///
/// Nodes are marked visited when enqueued, so each is enqueued at most once
/// and keeps its first-discovery predecessor.  The search stops when `end` is
/// dequeued, not when it is first discovered.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn bfs(graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut queue = VecDeque::from([start]);
    let mut visited = FxHashSet::from_iter([start]);
    let mut pred: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut explored = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == end {
            break;
        }
        explored += 1;

        for edge in graph.out_edges(current) {
            if visited.insert(edge.to) {
                pred.insert(edge.to, current);
                queue.push_back(edge.to);
            }
        }
    }

    let path = reconstruct(&pred, start, end);
    tracing::debug!(explored, hops = path.len().saturating_sub(1), found = !path.is_empty(), "bfs done");
    path
}

// ── Depth-first ───────────────────────────────────────────────────────────────

/// Unweighted depth-first search with an explicit stack.
///
/// A node is marked visited when popped, so it may sit on the stack several
/// times; its predecessor is overwritten on every push and therefore always
/// names the expansion that pushed its topmost copy.  The last-pushed
/// neighbour is explored first.  The search stops when `end` is popped.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn dfs(graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut stack = vec![start];
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut pred: FxHashMap<NodeId, NodeId> = FxHashMap::default();

    while let Some(current) = stack.pop() {
        if current == end {
            break;
        }
        if !visited.insert(current) {
            continue;
        }

        for edge in graph.out_edges(current) {
            if !visited.contains(&edge.to) {
                pred.insert(edge.to, current);
                stack.push(edge.to);
            }
        }
    }

    let path = reconstruct(&pred, start, end);
    tracing::debug!(
        explored = visited.len(),
        hops = path.len().saturating_sub(1),
        found = !path.is_empty(),
        "dfs done"
    );
    path
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Weighted shortest path (Dijkstra) with a lazy-deletion binary heap.
///
/// Relaxation re-enqueues a node whenever its distance improves instead of
/// decreasing a key in place; heap entries whose cost is worse than the
/// node's current best are skipped when popped.  Ids absent from the
/// distance map are at infinite distance.  The search stops when `end` is
/// popped.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn dijkstra(graph: &CampusGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    // dist[v] = best known cost to reach v.
    let mut dist: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut pred: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut explored = 0usize;

    dist.insert(start, 0.0);

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
        if node == end {
            break;
        }

        // Skip stale heap entries.
        if cost > best(&dist, node) {
            continue;
        }
        explored += 1;

        for edge in graph.out_edges(node) {
            let alt = cost + edge.weight;
            if alt < best(&dist, edge.to) {
                dist.insert(edge.to, alt);
                pred.insert(edge.to, node);
                heap.push(Reverse((OrderedFloat(alt), edge.to)));
            }
        }
    }

    let path = reconstruct(&pred, start, end);
    tracing::debug!(
        explored,
        hops = path.len().saturating_sub(1),
        cost = best(&dist, end),
        "dijkstra done"
    );
    path
}

#[inline]
fn best(dist: &FxHashMap<NodeId, f64>, node: NodeId) -> f64 {
    dist.get(&node).copied().unwrap_or(f64::INFINITY)
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk predecessor links back from `end` to `start`.
///
/// Returns `[start]` when `start == end` and an empty path when the chain
/// breaks before reaching `start`.
fn reconstruct(pred: &FxHashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        match pred.get(&cur) {
            Some(&p) => cur = p,
            None => return Vec::new(),
        }
        path.push(cur);
        // A predecessor chain can only cycle if weights were negative.
        if path.len() > pred.len() + 1 {
            tracing::warn!(%start, %end, "predecessor cycle; negative edge weight?");
            return Vec::new();
        }
    }
    path.reverse();
    path
}
