use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("request requires a query")]
    MissingQuery,

    #[error("illegal request field '{name}'")]
    IllegalField { name: String },

    #[error("failed to parse query: {0}")]
    Parse(#[from] parser::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}
