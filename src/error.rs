use thiserror::Error;

/// Errors produced while building, querying or evaluating a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("record {record} has no value for attribute '{attribute}'")]
    MissingAttribute { attribute: String, record: u64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("tree wasn't built yet")]
    NotFitted,

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
