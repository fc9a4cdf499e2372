use sw_core::SwError;
use sw_graph::GraphError;
use sw_walker::WalkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] SwError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("walker error: {0}")]
    Walk(#[from] WalkError),
}

pub type SimResult<T> = Result<T, SimError>;
