use thiserror::Error;

use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("host refused action: {0}")]
    ActionRefused(&'static str),

    #[error("unknown unit: {0:?}")]
    UnknownUnit(UnitId),

    #[error("location out of bounds")]
    OutOfBounds,

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;
