//! Shared error type.
//!
//! Sub-crates define their own error enums; `mz-sim` wraps `MzError` for
//! configuration failures surfaced while building a game.

use thiserror::Error;

/// Errors raised by `mz-core` itself.
#[derive(Debug, Error)]
pub enum MzError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mz-core`.
pub type MzResult<T> = Result<T, MzError>;
