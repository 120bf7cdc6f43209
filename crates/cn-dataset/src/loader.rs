//! Dataset loaders.
//!
//! # JSON
//!
//! A single document with `nodes` and `edges` arrays; see
//! [`records`](crate::records) for the field list.
//!
//! # CSV
//!
//! Two files, one per record type, with a header row:
//!
//! ```csv
//! id,name,lat,lng,accessible,type
//! 1,,12.9241,77.4982,true,path
//! 2,Library,12.9243,77.4985,true,building
//! ```
//!
//! ```csv
//! from,to,distance,time,accessible,name
//! 1,2,14.2,10.1,true,
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::records::{Dataset, EdgeRecord, NodeRecord};
use crate::DatasetResult;

// ── JSON ──────────────────────────────────────────────────────────────────────

/// Load a dataset from a JSON file.
pub fn load_dataset_json(path: &Path) -> DatasetResult<Dataset> {
    let file = File::open(path)?;
    let dataset = load_dataset_reader(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        nodes = dataset.nodes.len(),
        edges = dataset.edges.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Like [`load_dataset_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_dataset_reader<R: Read>(reader: R) -> DatasetResult<Dataset> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write `dataset` as pretty-printed JSON.
pub fn save_dataset_json(path: &Path, dataset: &Dataset) -> DatasetResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_dataset_writer(&mut writer, dataset)?;
    writer.flush()?;
    Ok(())
}

pub fn write_dataset_writer<W: Write>(writer: W, dataset: &Dataset) -> DatasetResult<()> {
    serde_json::to_writer_pretty(writer, dataset)?;
    Ok(())
}

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Load node and edge CSV files into one dataset.
pub fn load_dataset_csv(nodes: &Path, edges: &Path) -> DatasetResult<Dataset> {
    let dataset = Dataset {
        nodes: load_nodes_csv_reader(File::open(nodes)?)?,
        edges: load_edges_csv_reader(File::open(edges)?)?,
    };
    tracing::info!(
        nodes = dataset.nodes.len(),
        edges = dataset.edges.len(),
        "dataset loaded from CSV"
    );
    Ok(dataset)
}

pub fn load_nodes_csv_reader<R: Read>(reader: R) -> DatasetResult<Vec<NodeRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader
        .deserialize::<NodeRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn load_edges_csv_reader<R: Read>(reader: R) -> DatasetResult<Vec<EdgeRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader
        .deserialize::<EdgeRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
