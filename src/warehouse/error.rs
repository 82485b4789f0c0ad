use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid order step: {0}")]
    InvalidTransition(String),

    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, WarehouseError>;
