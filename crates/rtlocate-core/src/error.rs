use std::path::PathBuf;

use thiserror::Error;

use crate::RollForward;

/// Failures of a single resolution call. None of these are retried; the
/// caller decides whether to fall back to a self-contained launch.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("could not obtain runtime environment information: {message}")]
    Discovery { message: String },

    #[error("invalid runtime config: {message}")]
    Manifest { message: String },

    #[error("unable to parse roll-forward policy from {source_name}, which was: {value}")]
    Config { source_name: String, value: String },

    #[error("roll-forward policy '{0}' is not supported")]
    UnsupportedPolicy(RollForward),

    #[error("executable must be a '.dll' file with a parent directory; provided: {}", path.display())]
    InvalidExecutable { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocateError {
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }
}
