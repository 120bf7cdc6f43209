//! Serialized node and edge records.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "nodes": [
//!     {"id": 1, "name": "", "lat": 12.9241, "lng": 77.4982, "accessible": true, "type": "path"}
//!   ],
//!   "edges": [
//!     {"from": 1, "to": 2, "distance": 14.2, "time": 10.1, "accessible": true}
//!   ]
//! }
//! ```
//!
//! `name`, `accessible`, `type`, and `time` may be omitted; they default to
//! `""`, `true`, `"path"`, and absent respectively.

use serde::{Deserialize, Serialize};

use cn_core::{NodeId, WeightCriterion};
use cn_graph::{CampusGraph, Edge, Node, NodeKind};

use crate::{DatasetError, DatasetResult};

fn default_true() -> bool {
    true
}

// ── NodeRecord ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id:         NodeId,
    #[serde(default)]
    pub name:       String,
    pub lat:        f64,
    pub lng:        f64,
    #[serde(default = "default_true")]
    pub accessible: bool,
    #[serde(rename = "type", default)]
    pub kind:       NodeKind,
}

impl NodeRecord {
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(self.id, self.lat, self.lng)
            .named(self.name.clone())
            .with_kind(self.kind);
        node.accessible = self.accessible;
        node
    }
}

// ── EdgeRecord ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from:       NodeId,
    pub to:         NodeId,
    /// Length in metres.
    pub distance:   f64,
    /// Walking time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time:       Option<f64>,
    #[serde(default = "default_true")]
    pub accessible: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name:       String,
}

impl EdgeRecord {
    /// The scalar selected by `criterion`.
    ///
    /// # Errors
    ///
    /// [`DatasetError::MissingTime`] when `Time` is requested but absent;
    /// [`DatasetError::InvalidWeight`] for negative or non-finite values,
    /// which would break weighted search.
    pub fn weight(&self, criterion: WeightCriterion) -> DatasetResult<f64> {
        let weight = match criterion {
            WeightCriterion::Distance => self.distance,
            WeightCriterion::Time => self
                .time
                .ok_or(DatasetError::MissingTime { from: self.from, to: self.to })?,
        };
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(DatasetError::InvalidWeight { from: self.from, to: self.to, weight });
        }
        Ok(weight)
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Dataset {
    /// Build a [`CampusGraph`]: every node, then every edge, in record order,
    /// with `criterion` picking each edge's weight.
    ///
    /// Edges that reference unknown nodes are kept (search treats those ids
    /// as dead ends) and reported in a warning.
    pub fn to_graph(&self, criterion: WeightCriterion) -> DatasetResult<CampusGraph> {
        let mut graph = CampusGraph::with_capacity(self.nodes.len());

        for rec in &self.nodes {
            graph.add_node(rec.to_node());
        }

        for rec in &self.edges {
            graph.add_edge(Edge {
                from:       rec.from,
                to:         rec.to,
                weight:     rec.weight(criterion)?,
                accessible: rec.accessible,
            });
        }

        let dangling = graph.dangling_edge_count();
        if dangling > 0 {
            tracing::warn!(dangling, "edges reference nodes missing from the dataset");
        }
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            %criterion,
            "campus graph built"
        );
        Ok(graph)
    }
}
