//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `sw-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("point {0} not found in graph")]
    UnknownPoint(String),

    #[error("point {0} defined more than once")]
    DuplicatePoint(String),

    #[error("edge {edge} references unknown point {id}")]
    UnknownEdgeEndpoint { edge: String, id: String },

    #[error("cell ({col}, {row}) lies outside the lattice")]
    OutOfBounds { col: u32, row: u32 },

    #[error("lattice needs at least one column and one row, got {cols}x{rows}")]
    InvalidDimensions { cols: u32, rows: u32 },

    #[error("level parse error: {0}")]
    Level(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
