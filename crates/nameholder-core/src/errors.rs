use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command on line {line}: {command}")]
    UnknownCommand { line: usize, command: String },
}

pub type Result<T> = std::result::Result<T, HolderError>;
