use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid handler override for extension '{extension}': {reason}")]
    InvalidOverride { extension: String, reason: String },

    #[error("Failed to read handler overrides from {path}: {source}")]
    OverridesUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid handler overrides document {path}: {reason}")]
    OverridesMalformed { path: PathBuf, reason: String },

    #[error("Unsupported handler overrides format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedOverridesFormat { path: PathBuf },

    #[error("The type registry has already been initialized")]
    AlreadyInitialized,
}
