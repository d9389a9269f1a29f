//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EgError` as one variant
//! via `#[from]` where they need to surface core validation failures.

use thiserror::Error;

/// The base error type for `eg-core`.
#[derive(Debug, Error)]
pub enum EgError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `eg-core`.
pub type EgResult<T> = Result<T, EgError>;
