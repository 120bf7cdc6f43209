//! Spatial index over a graph's nodes.
//!
//! Index space is `x = latitude`, `y = longitude`, matching [`IndexConfig`].

use cn_core::IndexConfig;
use cn_graph::{CampusGraph, Node};
use cn_quadtree::{Point, QuadTree, Rectangle};

use crate::DatasetResult;

/// Root boundary described by `config`.
pub fn index_boundary(config: &IndexConfig) -> Rectangle {
    Rectangle::new(config.center_x, config.center_y, config.half_width, config.half_height)
}

/// Insert every node of `graph`, in graph order, into a fresh quadtree.
///
/// Points borrow the graph's node records, so the index cannot outlive the
/// graph.  Nodes outside the configured boundary are skipped and counted in
/// a warning.
///
/// # Errors
///
/// Returns [`DatasetError::Config`](crate::DatasetError::Config) if `config`
/// fails validation.
pub fn build_node_index<'g>(
    graph: &'g CampusGraph,
    config: &IndexConfig,
) -> DatasetResult<QuadTree<&'g Node>> {
    config.validate()?;

    let mut tree = QuadTree::new(index_boundary(config), config.capacity);
    let mut skipped = 0usize;
    for node in graph.nodes() {
        if !tree.insert(Point::new(node.pos.lat, node.pos.lon, node)) {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "nodes outside the index boundary were not indexed");
    }
    tracing::info!(
        indexed = tree.len(),
        depth = tree.depth(),
        capacity = config.capacity,
        "node index built"
    );
    Ok(tree)
}

/// A boundary that fits every node of `graph`, or `None` for an empty graph.
pub fn fitted_index_config(graph: &CampusGraph, capacity: usize) -> Option<IndexConfig> {
    IndexConfig::fit(graph.nodes().map(|n| (n.pos.lat, n.pos.lon)), capacity)
}

/// The node nearest to `(lat, lon)`, or `None` if the index is empty.
pub fn nearest_node<'g>(index: &QuadTree<&'g Node>, lat: f64, lon: f64) -> Option<&'g Node> {
    let hit = index.find_nearest(lat, lon).map(|p| p.data);
    if let Some(node) = hit {
        tracing::debug!(lat, lon, id = %node.id, "nearest node");
    }
    hit
}
