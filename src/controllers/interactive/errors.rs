use std::error::Error;
use std::fmt;
use std::io;

use crate::core::config::render_config::ConfigError;

#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    /// The compute thread could not be launched. There is no single-threaded
    /// fallback, so callers treat this as fatal.
    SpawnWorker(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid render configuration: {}", err),
            Self::SpawnWorker(err) => write!(f, "could not launch render thread: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::SpawnWorker(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
