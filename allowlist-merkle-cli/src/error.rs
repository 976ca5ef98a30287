use std::path::PathBuf;

use allowlist_merkle_tree::AllowlistTreeError;
use thiserror::Error;

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {source}", .path.display())]
    Input {
        path: PathBuf,
        line: usize,
        #[source]
        source: AllowlistTreeError,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Tree(#[from] AllowlistTreeError),
}

impl CliError {
    /// Process exit code: 1 when the answer is "no" (unknown value, proof
    /// does not verify), 2 for every other failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tree(
                AllowlistTreeError::UnknownValue(_) | AllowlistTreeError::InvalidProof(_),
            ) => 1,
            _ => 2,
        }
    }
}
