use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("preference store unavailable")]
    StorageUnavailable,

    #[error("preference store error: {0}")]
    Storage(String),

    #[error("no root element to mark")]
    NoDocument,

    #[error("document error: {0}")]
    Document(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid theme config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
