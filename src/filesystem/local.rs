//! Direct access to a directory tree on the host

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};
use url::Url;

use super::access::{ByteSource, LogicalUrlAccess, PathAccess};

/// Filesystem rooted at a host directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFilesystem {
    base: PathBuf,
}

impl LocalFilesystem {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Map a filesystem-relative path onto the host, refusing to leave the root
    pub fn host_path(&self, path: &Path) -> io::Result<PathBuf> {
        let mut relative = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(io::Error::new(
                            io::ErrorKind::PermissionDenied,
                            format!("path escapes filesystem root: {}", path.display()),
                        ));
                    }
                }
                Component::Normal(part) => relative.push(part),
            }
        }
        Ok(self.base.join(relative))
    }

    fn relative_path(&self, host: &Path) -> Option<PathBuf> {
        let relative = host.strip_prefix(&self.base).ok()?;
        Some(Path::new("/").join(relative))
    }
}

impl PathAccess for LocalFilesystem {
    fn open_file(&self, path: &Path) -> io::Result<Box<dyn ByteSource>> {
        let file = File::open(self.host_path(path)?)?;
        Ok(Box::new(file))
    }

    fn exists(&self, path: &Path) -> bool {
        self.host_path(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.host_path(path).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn read_directory(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let host = self.host_path(path)?;
        let mut entries = Vec::new();
        for entry in fs::read_dir(host)? {
            let entry = entry?;
            if let Some(relative) = self.relative_path(&entry.path()) {
                entries.push(relative);
            }
        }
        entries.sort();
        Ok(entries)
    }
}

impl LogicalUrlAccess for LocalFilesystem {
    fn logical_url_for_path(&self, path: &Path) -> Option<Url> {
        let host = self.host_path(path).ok()?;
        Url::from_file_path(host).ok()
    }

    fn path_for_logical_url(&self, url: &Url) -> Option<PathBuf> {
        let host = url.to_file_path().ok()?;
        self.relative_path(&host)
    }
}
