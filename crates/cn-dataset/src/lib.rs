//! `cn-dataset` — getting campus data in and out of the engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`records`] | `NodeRecord`, `EdgeRecord`, `Dataset` (+ `Dataset::to_graph`) |
//! | [`loader`]  | JSON and CSV readers/writers                                  |
//! | [`index`]   | `build_node_index`, `fitted_index_config`, `nearest_node`     |
//! | [`geojson`] | `preprocess_geojson` (raw map features → `Dataset`)           |
//! | [`error`]   | `DatasetError`, `DatasetResult<T>`                            |
//!
//! This is where the otherwise independent graph and spatial index are
//! composed: both are built from the same node records.

pub mod error;
pub mod geojson;
pub mod index;
pub mod loader;
pub mod records;


pub use error::{DatasetError, DatasetResult};
pub use geojson::{preprocess_geojson, preprocess_geojson_file};
pub use index::{build_node_index, fitted_index_config, index_boundary, nearest_node};
pub use loader::{
    load_dataset_csv, load_dataset_json, load_dataset_reader, load_edges_csv_reader,
    load_nodes_csv_reader, save_dataset_json, write_dataset_writer,
};
pub use records::{Dataset, EdgeRecord, NodeRecord};
