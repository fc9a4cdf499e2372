use sw_graph::GraphError;
use thiserror::Error;

/// Anomalies the walker can run into.  None of them is fatal: the walker
/// logs the error, parks in `NotStepping`, and reports it via
/// [`Step::Stalled`](crate::Step::Stalled).
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("point {0} not found")]
    UnknownPointId(String),

    #[error("cannot reverse from block {block}: no route back to {previous}")]
    MissingPredecessor { block: String, previous: String },

    #[error("no legal next move from {0}")]
    EmptyCandidateSet(String),

    #[error("graph error: {0}")]
    Graph(GraphError),
}

impl From<GraphError> for WalkError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownPoint(id) => WalkError::UnknownPointId(id),
            other => WalkError::Graph(other),
        }
    }
}

pub type WalkResult<T> = Result<T, WalkError>;
