use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Pokemon not found: {0}")]
    PokemonNotFound(String),

    #[error("Missing credentials: {0} not set")]
    MissingCredentials(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dataset file missing: {0}")]
    MissingDataset(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
