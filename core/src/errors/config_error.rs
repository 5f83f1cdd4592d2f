// core/src/errors/config_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid flags: {0}")]
    Flags(#[source] clap::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("env var invalid: {key}: {source}")]
    EnvInvalid {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("config does not fit the app: {0}")]
    Decode(#[source] anyhow::Error),
}
