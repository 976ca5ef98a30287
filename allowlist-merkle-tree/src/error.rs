use thiserror::Error;

/// Errors from allow-list tree construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllowlistTreeError {
    #[error("cannot build a tree from an empty value set")]
    EmptyInput,
    #[error("value {0} is not in the tree")]
    UnknownValue(String),
    #[error("tree has not been built")]
    NotBuilt,
    #[error("value {0} appears more than once")]
    DuplicateValue(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("invalid dump: {0}")]
    InvalidDump(String),
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
