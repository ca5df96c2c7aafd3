//! Whether the emulated DOS environment can run a program file

use std::path::Path;
use tracing::debug;
use url::Url;

use super::error::{ExecutableError, Result};
use super::sniffer::ExecutableSniffer;
use crate::filesystem::PathAccess;
use crate::registry::TypeRegistry;
use crate::types::identifiers::{BATCH_PROGRAM_TYPE, COM_PROGRAM_TYPE, EXE_PROGRAM_TYPE};
use crate::types::ExecutableType;

/// Decides DOS compatibility from a file's extension, and for `.exe` files
/// from their header.
///
/// `.com` and `.bat` files are always runnable and are never read: plenty of
/// valid `.com` programs carry no MZ header at all.
pub struct CompatibilityChecker<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> CompatibilityChecker<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Check the file at `path` inside `filesystem`.
    ///
    /// `Ok(false)` is a readable Windows, OS/2 or unidentified executable; an
    /// error means the verdict is also "not compatible", with the reason.
    pub fn is_compatible_path(&self, path: &Path, filesystem: &dyn PathAccess) -> Result<bool> {
        self.check(path, || ExecutableSniffer::classify_path(path, filesystem))
    }

    /// Check the local file behind a `file://` URL
    pub fn is_compatible_url(&self, url: &Url) -> Result<bool> {
        let name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        self.check(Path::new(name), || ExecutableSniffer::classify_url(url))
    }

    fn check<F>(&self, path: &Path, sniff: F) -> Result<bool>
    where
        F: FnOnce() -> Result<ExecutableType>,
    {
        match self.registry.type_for_path(path) {
            Some(COM_PROGRAM_TYPE) | Some(BATCH_PROGRAM_TYPE) => {
                debug!("{} runs directly, skipping header check", path.display());
                Ok(true)
            }
            Some(EXE_PROGRAM_TYPE) => {
                let executable_type = sniff()?;
                debug!("{} is a {} executable", path.display(), executable_type);
                Ok(executable_type == ExecutableType::Dos)
            }
            _ => Err(ExecutableError::NotAnExecutable {
                reason: format!("{} is not a program file", path.display()),
            }),
        }
    }
}
