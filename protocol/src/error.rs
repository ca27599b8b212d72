use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),
    #[error("Malformed command arguments")]
    Usage,
    #[error("Malformed callback token {0:?}")]
    MalformedToken(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
