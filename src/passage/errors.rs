use thiserror::Error;

/// Failures that are not a missing passage. These become a 500.
#[derive(Error, Debug)]
pub enum PassageError {
    #[error("extraction task failed: {0}")]
    Extraction(#[from] tokio::task::JoinError),
}
