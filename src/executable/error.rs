use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExecutableError>;

#[derive(Debug, Error)]
pub enum ExecutableError {
    #[error("Not a recognised executable: {reason}")]
    NotAnExecutable { reason: String },

    #[error("Could not read executable {location}: {source}")]
    CouldNotReadExecutable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Executable is truncated: {reason}")]
    ExecutableTruncated { reason: String },
}

/// Comparable error kind, with the legacy numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutableErrorKind {
    NotAnExecutable = 1,
    CouldNotReadExecutable = 2,
    ExecutableTruncated = 3,
}

impl ExecutableError {
    pub fn kind(&self) -> ExecutableErrorKind {
        match self {
            ExecutableError::NotAnExecutable { .. } => ExecutableErrorKind::NotAnExecutable,
            ExecutableError::CouldNotReadExecutable { .. } => {
                ExecutableErrorKind::CouldNotReadExecutable
            }
            ExecutableError::ExecutableTruncated { .. } => ExecutableErrorKind::ExecutableTruncated,
        }
    }

    pub fn code(&self) -> i32 {
        self.kind() as i32
    }

    pub(crate) fn unreadable(location: impl Into<String>, source: std::io::Error) -> Self {
        ExecutableError::CouldNotReadExecutable {
            location: location.into(),
            source,
        }
    }

    /// Attach a path to read failures raised while reading an anonymous stream
    pub(crate) fn at(self, location: impl Into<String>) -> Self {
        match self {
            ExecutableError::CouldNotReadExecutable { source, .. } => {
                ExecutableError::CouldNotReadExecutable {
                    location: location.into(),
                    source,
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for ExecutableErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutableErrorKind::NotAnExecutable => "not an executable",
            ExecutableErrorKind::CouldNotReadExecutable => "could not read executable",
            ExecutableErrorKind::ExecutableTruncated => "executable truncated",
        };
        f.write_str(name)
    }
}
