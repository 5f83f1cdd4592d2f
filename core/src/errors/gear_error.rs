// core/src/errors/gear_error.rs
use thiserror::Error;

use super::config_error::ConfigError;

#[derive(Debug, Error)]
pub enum GearError {
    #[error("error configuring app: {0}")]
    Configure(#[source] ConfigError),

    #[error("command {0:?} not found")]
    CommandNotFound(String),

    /// The app wired up its command table wrong. `name` is the derived
    /// method name (e.g. `BuildCmd`).
    #[error("programmer error: {detail} (method {name:?})")]
    Programmer { name: String, detail: String },

    /// Error returned by the command handler itself, passed through as-is.
    #[error(transparent)]
    Command(anyhow::Error),

    #[error("error running command {cmd:?}: {source}")]
    Run {
        cmd: String,
        #[source]
        source: Box<GearError>,
    },
}

impl GearError {
    /// Strips `Run` context and returns the innermost dispatcher error.
    pub fn root(&self) -> &GearError {
        match self {
            GearError::Run { source, .. } => source.root(),
            other => other,
        }
    }

    /// The handler's own error, if this failure came from a command body.
    pub fn command_error(&self) -> Option<&anyhow::Error> {
        match self.root() {
            GearError::Command(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_programmer_error(&self) -> bool {
        matches!(self.root(), GearError::Programmer { .. })
    }
}
