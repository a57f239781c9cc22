use thiserror::Error;

#[derive(Debug, Error)]
pub enum DqError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dictionary document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, DqError>;
