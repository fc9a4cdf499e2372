//! Shared error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `WalkError`,
//! `SimError`) and wrap `SwError` where configuration problems surface.

use thiserror::Error;

/// Errors produced while validating configuration.
#[derive(Debug, Error)]
pub enum SwError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sw-core`.
pub type SwResult<T> = Result<T, SwError>;
