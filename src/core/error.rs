use thiserror::Error;

#[derive(Error, Debug)]
pub enum SekaiError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Agent not found: {0:?}")]
    AgentNotFound(crate::agent::AgentId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SekaiError>;
