use thiserror::Error;

use cn_core::{CnError, NodeId};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] CnError),

    #[error("edge {from} -> {to} has no travel time")]
    MissingTime { from: NodeId, to: NodeId },

    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

pub type DatasetResult<T> = Result<T, DatasetError>;
