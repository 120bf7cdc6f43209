//! Graph-subsystem error type.
//!
//! Path search itself never fails (an empty path means "no route"); these
//! errors come from resolving named locations.

use thiserror::Error;

/// Errors produced by `cn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no location named {0:?}")]
    UnknownLocation(String),

    #[error("start and end are the same location ({0:?})")]
    SameLocation(String),

    #[error("no route from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
