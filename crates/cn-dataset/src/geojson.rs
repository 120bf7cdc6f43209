//! GeoJSON preprocessing: raw map features → node/edge [`Dataset`].
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use cn_core::PreprocessConfig;
//! use cn_dataset::preprocess_geojson_file;
//!
//! let dataset = preprocess_geojson_file(Path::new("campus.geojson"), &PreprocessConfig::default())?;
//! ```
//!
//! # What is loaded
//!
//! Features are processed in three passes regardless of their order in the
//! file:
//!
//! 1. `LineString`: walkways.  Every coordinate becomes a `path` node and
//!    consecutive coordinates are joined by a directed edge.
//! 2. Named `Polygon`: buildings.  Outer-ring coordinates become `building`
//!    nodes joined around the perimeter (`i → i+1`, wrapping), and each ring
//!    node is linked both ways to its nearest non-building node.
//! 3. Named `Point`: standalone places, linked like building nodes.
//!
//! A coordinate within `node_match_threshold_m` of an existing node reuses
//! that node instead of creating a new one; a reused unnamed node adopts the
//! building's name.  Node ids are assigned sequentially from 1.  All other
//! geometry types, unnamed polygons, and unnamed points are ignored.
//!
//! Distances are haversine metres; times are distance over
//! `walking_speed_mps`.
//!
//! # Complexity
//!
//! Node matching and nearest-node linking scan all nodes, so preprocessing is
//! quadratic in the node count.  Campus-sized inputs (a few thousand nodes)
//! finish in well under a second.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use cn_core::{GeoPoint, NodeId, PreprocessConfig};
use cn_graph::NodeKind;

use crate::records::{Dataset, EdgeRecord, NodeRecord};
use crate::DatasetResult;

// ── Public entry points ───────────────────────────────────────────────────────

/// Preprocess a GeoJSON `FeatureCollection` file.
pub fn preprocess_geojson_file(path: &Path, config: &PreprocessConfig) -> DatasetResult<Dataset> {
    let file = File::open(path)?;
    preprocess_geojson(BufReader::new(file), config)
}

/// Like [`preprocess_geojson_file`] but accepts any `Read` source.
///
/// # Errors
///
/// Returns [`DatasetError::Config`](crate::DatasetError::Config) for an
/// invalid `config` and [`DatasetError::Json`](crate::DatasetError::Json) if
/// the input is not a feature collection.
pub fn preprocess_geojson<R: Read>(reader: R, config: &PreprocessConfig) -> DatasetResult<Dataset> {
    config.validate()?;
    let collection: FeatureCollection = serde_json::from_reader(reader)?;

    // ── Sort features into the three passes ───────────────────────────────
    let mut lines: Vec<&[Position]> = Vec::new();
    let mut polygons: Vec<(&str, &[Position])> = Vec::new();
    let mut points: Vec<(&str, &Position)> = Vec::new();

    for feature in &collection.features {
        let name = feature.name();
        match &feature.geometry {
            Some(Geometry::LineString { coordinates }) => lines.push(coordinates),
            Some(Geometry::Polygon { coordinates }) if !name.is_empty() => {
                if let Some(outer) = coordinates.first() {
                    polygons.push((name, outer.as_slice()));
                }
            }
            Some(Geometry::Point { coordinates }) if !name.is_empty() => {
                points.push((name, coordinates));
            }
            _ => {}
        }
    }

    let mut builder = NetworkBuilder::new(config);

    // ── Pass 1: walkways ──────────────────────────────────────────────────
    for line in lines {
        let mut way: Vec<usize> = Vec::with_capacity(line.len());
        for pos in line.iter().filter_map(locate) {
            way.push(builder.path_node(pos));
        }
        for pair in way.windows(2) {
            builder.add_edge(pair[0], pair[1], "");
        }
    }

    // ── Pass 2: building outlines ─────────────────────────────────────────
    for (name, ring) in polygons {
        let mut outline: Vec<usize> = Vec::with_capacity(ring.len());
        for pos in ring.iter().filter_map(locate) {
            let idx = builder.building_node(pos, name);
            outline.push(idx);
            builder.link_to_nearest_path(idx, pos);
        }
        for i in 0..outline.len() {
            let next = outline[(i + 1) % outline.len()];
            builder.add_edge(outline[i], next, name);
        }
    }

    // ── Pass 3: standalone places ─────────────────────────────────────────
    for (name, point) in points {
        if let Some(pos) = locate(point) {
            let idx = builder.building_node(pos, name);
            builder.link_to_nearest_path(idx, pos);
        }
    }

    let dataset = builder.finish();
    tracing::info!(
        nodes = dataset.nodes.len(),
        edges = dataset.edges.len(),
        "geojson preprocessed"
    );
    Ok(dataset)
}

// ── GeoJSON subset ────────────────────────────────────────────────────────────

/// `[lon, lat, (alt)]`.
type Position = Vec<f64>;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    geometry:   Option<Geometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

impl Feature {
    /// The `name` property, or `""` when missing or not a string.
    fn name(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    Point { coordinates: Position },
    #[serde(other)]
    Other,
}

/// Parse a GeoJSON position, warning about malformed ones.
fn locate(position: &Position) -> Option<GeoPoint> {
    match position.as_slice() {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some(GeoPoint::new(*lat, *lon)),
        _ => {
            tracing::warn!(?position, "skipping malformed coordinate");
            None
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

struct NetworkBuilder<'c> {
    config: &'c PreprocessConfig,
    nodes:  Vec<NodeRecord>,
    edges:  Vec<EdgeRecord>,
}

impl<'c> NetworkBuilder<'c> {
    fn new(config: &'c PreprocessConfig) -> Self {
        Self { config, nodes: Vec::new(), edges: Vec::new() }
    }

    fn finish(self) -> Dataset {
        Dataset { nodes: self.nodes, edges: self.edges }
    }

    fn pos(&self, idx: usize) -> GeoPoint {
        let n = &self.nodes[idx];
        GeoPoint::new(n.lat, n.lng)
    }

    /// First node (in creation order) within the match threshold of `pos`.
    fn existing(&self, pos: GeoPoint) -> Option<usize> {
        (0..self.nodes.len()).find(|&i| self.pos(i).distance_m(pos) <= self.config.node_match_threshold_m)
    }

    fn create(&mut self, pos: GeoPoint, name: &str, kind: NodeKind) -> usize {
        let id = NodeId(self.nodes.len() as u32 + 1);
        self.nodes.push(NodeRecord {
            id,
            name: name.to_owned(),
            lat: pos.lat,
            lng: pos.lon,
            accessible: true,
            kind,
        });
        self.nodes.len() - 1
    }

    fn path_node(&mut self, pos: GeoPoint) -> usize {
        match self.existing(pos) {
            Some(idx) => idx,
            None => self.create(pos, "", NodeKind::Path),
        }
    }

    fn building_node(&mut self, pos: GeoPoint, name: &str) -> usize {
        match self.existing(pos) {
            Some(idx) => {
                if self.nodes[idx].name.is_empty() {
                    self.nodes[idx].name = name.to_owned();
                }
                idx
            }
            None => self.create(pos, name, NodeKind::Building),
        }
    }

    fn add_edge(&mut self, from: usize, to: usize, name: &str) {
        let distance = self.pos(from).distance_m(self.pos(to));
        self.edges.push(EdgeRecord {
            from: self.nodes[from].id,
            to: self.nodes[to].id,
            distance,
            time: Some(distance / self.config.walking_speed_mps),
            accessible: true,
            name: name.to_owned(),
        });
    }

    /// Link `idx` both ways to the node closest to `near` that is not a
    /// building (ties go to the earliest node).  No-op if there is none.
    fn link_to_nearest_path(&mut self, idx: usize, near: GeoPoint) {
        let mut best: Option<(usize, f64)> = None;
        for (i, n) in self.nodes.iter().enumerate() {
            if i == idx || n.kind == NodeKind::Building {
                continue;
            }
            let d = near.distance_m(GeoPoint::new(n.lat, n.lng));
            if d < best.map_or(f64::INFINITY, |(_, b)| b) {
                best = Some((i, d));
            }
        }

        if let Some((nearest, _)) = best {
            self.add_edge(idx, nearest, "");
            self.add_edge(nearest, idx, "");
        }
    }
}
