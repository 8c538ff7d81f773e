use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Error type shared by the collaborators around the ledger.
///
/// Ledger operations themselves never fail; these variants surface from
/// text parsing, configuration files, and repository setup.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid transaction type `{0}` (expected `income` or `expense`)")]
    InvalidKind(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },
}
