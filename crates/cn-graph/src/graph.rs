//! Campus graph representation.
//!
//! # Data layout
//!
//! Nodes live in a hash map keyed by [`NodeId`]; a side vector remembers the
//! order in which ids were first added so iteration is deterministic.
//! Outgoing edges live in a second map, `from → Vec<Edge>`, in insertion
//! order.  Edges are never deduplicated and never validated: an edge may point
//! at (or come from) an id with no node record.  Such ids are dead ends:
//! [`CampusGraph::out_edges`] is empty for them even when edges were recorded
//! from them, so search can reach an unknown id but never leave it.

use rustc_hash::FxHashMap;

use cn_core::{GeoPoint, NodeId};

// ── Node ──────────────────────────────────────────────────────────────────────

/// What a node represents on the ground.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    /// A vertex along a walkway.
    #[default]
    Path,
    /// A point on a building outline or a standalone named place.
    Building,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Path     => "path",
            NodeKind::Building => "building",
        }
    }
}

/// A campus location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:         NodeId,
    pub pos:        GeoPoint,
    /// Display name; empty for anonymous walkway vertices.
    pub name:       String,
    pub kind:       NodeKind,
    pub accessible: bool,
}

impl Node {
    /// An unnamed, accessible walkway node.
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self {
            id,
            pos: GeoPoint::new(lat, lon),
            name: String::new(),
            kind: NodeKind::Path,
            accessible: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// The trimmed name, or `None` for anonymous nodes.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed walkway segment.
///
/// `weight` is whatever scalar the caller chose (distance or time) and must
/// be nonnegative for weighted search to be meaningful.  `accessible` is
/// carried for callers; search does not consult it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:       NodeId,
    pub to:         NodeId,
    pub weight:     f64,
    pub accessible: bool,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { from, to, weight, accessible: true }
    }
}

// ── CampusGraph ───────────────────────────────────────────────────────────────

/// Directed, weighted graph of campus locations and walkways.
///
/// Built once (single writer) and then queried read-only.
#[derive(Clone, Debug, Default)]
pub struct CampusGraph {
    nodes:      FxHashMap<NodeId, Node>,
    /// First-insertion order of node ids.
    order:      Vec<NodeId>,
    adjacency:  FxHashMap<NodeId, Vec<Edge>>,
    edge_count: usize,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes to reduce rehashing when
    /// bulk-loading a dataset.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes:      FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            order:      Vec::with_capacity(nodes),
            adjacency:  FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert `node`, replacing any earlier record with the same id, and make
    /// sure it has an (initially empty) adjacency list.
    ///
    /// Re-adding an id keeps its original position in [`nodes`](Self::nodes)
    /// and leaves its edges untouched.
    pub fn add_node(&mut self, node: Node) {
        let id = node.id;
        if self.nodes.insert(id, node).is_none() {
            self.order.push(id);
        }
        self.adjacency.entry(id).or_default();
    }

    /// Append a directed edge to its source's adjacency list.
    ///
    /// Neither endpoint needs a node record.  Always succeeds.
    pub fn add_edge(&mut self, edge: Edge) {
        self.adjacency.entry(edge.from).or_default().push(edge);
        self.edge_count += 1;
    }

    /// Convenience: add a walkway usable in **both directions**.
    pub fn add_walkway(&mut self, a: NodeId, b: NodeId, weight: f64, accessible: bool) {
        self.add_edge(Edge { from: a, to: b, weight, accessible });
        self.add_edge(Edge { from: b, to: a, weight, accessible });
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All node records in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Outgoing edges of `node` in insertion order.  Empty for ids without a
    /// node record, even if edges were recorded from them.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> &[Edge] {
        if !self.contains_node(node) {
            return &[];
        }
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or_default()
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_edges(node).len()
    }

    /// The first edge `from → to` in adjacency order, if any.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.out_edges(from).iter().find(|e| e.to == to)
    }

    /// Number of edges with at least one endpoint lacking a node record.
    pub fn dangling_edge_count(&self) -> usize {
        self.adjacency
            .values()
            .flatten()
            .filter(|e| !self.contains_node(e.from) || !self.contains_node(e.to))
            .count()
    }
}
