//! Path cost and the route result type.

use cn_core::{GeoPoint, NodeId};

use crate::graph::CampusGraph;

/// Total weight of `path`.
///
/// Each consecutive pair contributes the weight of the first matching edge in
/// adjacency order.  A pair with no edge makes the whole path unreachable:
/// the result is `f64::INFINITY` and callers must treat the path as invalid.
/// Paths with fewer than two nodes cost nothing.
pub fn path_cost(graph: &CampusGraph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edge_between(pair[0], pair[1])
                .map_or(f64::INFINITY, |e| e.weight)
        })
        .sum()
}

/// The result of a location-to-location routing query: the chosen node path
/// and its total weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order, from source to destination.
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along `nodes`, in the graph's weight unit.
    pub cost:  f64,
}

impl Route {
    /// Wrap `nodes`, computing its cost against `graph`.
    pub fn from_path(graph: &CampusGraph, nodes: Vec<NodeId>) -> Self {
        let cost = path_cost(graph, &nodes);
        Self { nodes, cost }
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// `true` if every consecutive pair is joined by an edge.
    pub fn is_valid(&self) -> bool {
        self.cost.is_finite()
    }

    /// Coordinates along the route, suitable for drawing a polyline.  Ids
    /// without a node record are skipped.
    pub fn polyline(&self, graph: &CampusGraph) -> Vec<GeoPoint> {
        self.nodes
            .iter()
            .filter_map(|&id| graph.node(id).map(|n| n.pos))
            .collect()
    }
}
