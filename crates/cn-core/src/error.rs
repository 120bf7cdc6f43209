//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CnError` as one variant
//! where configuration or parsing failures can surface.

use thiserror::Error;

/// The top-level error type for `cn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `cn-*` crates.
pub type CnResult<T> = Result<T, CnError>;
