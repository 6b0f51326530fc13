use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabulaError {
    #[error("Unknown table section: {0} (expected head, body or foot)")]
    UnknownSection(String),

    #[error("Unknown filter operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown cell move: {0}")]
    UnknownMove(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, TabulaError>;
