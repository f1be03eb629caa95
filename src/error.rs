use crate::validation::Violation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Data is invalid, please check fields!")]
    ValidationFailed { violations: Vec<Violation> },

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Invalid project ID format: {0}")]
    InvalidProjectId(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
