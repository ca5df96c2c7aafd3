use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilesystemError>;

/// Cause behind an image that could not be mounted or parsed
pub type ImageFailure = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FilesystemError {
    /// `source` is the [`MountError`] or [`ImageError`] reported for the
    /// image, absent when no mounter or parser was configured at all
    #[error("Unrecognized image format: {path}: {reason}")]
    UnrecognizedImageFormat {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<ImageFailure>,
    },

    #[error("No way to read {location} as a filesystem: {reason}")]
    UnreadableSource { location: String, reason: String },
}

/// Failure of the host's volume mounting facility
#[derive(Debug, Error)]
pub enum MountError {
    #[error("Mount tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Failed to run mount tool: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mount tool exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("Mount tool reported no mount point for {image}")]
    NoMountPoint { image: PathBuf },
}

/// Failure of an internal image-parsing filesystem
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image container: {reason}")]
    Unsupported { reason: String },

    #[error("Corrupt image: {reason}")]
    Corrupt { reason: String },
}

impl FilesystemError {
    pub(crate) fn unrecognized(path: &Path, reason: &str) -> Self {
        FilesystemError::UnrecognizedImageFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
            source: None,
        }
    }

    pub(crate) fn unrecognized_by(
        path: &Path,
        reason: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FilesystemError::UnrecognizedImageFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
