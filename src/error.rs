// src/error.rs
// Errors live at the adapter/CLI layer only; the generator core is total.

#[derive(Debug, thiserror::Error)]
pub enum RngError {
    #[error("draw from an unseeded generator; call reseed first")]
    Unseeded,
    #[error("snapshot: {0}")]
    Snapshot(String),
    #[error("config: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RngError>;
