use hal_framework::{ConfigError, PaginationError};
use thiserror::Error;

/// Errors surfaced by the sample API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource type registration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid pagination request: {0}")]
    Pagination(#[from] PaginationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Rendering task failed: {0}")]
    Render(#[from] tokio::task::JoinError),
}
