//! Narrow capability traits for reaching file contents

use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};
use url::Url;

/// Random-access byte stream: a local file, an archive member, or a file
/// inside a disk image
pub trait ByteSource: Read + Seek + Send {}

impl<T: Read + Seek + Send> ByteSource for T {}

/// Path-based access to a filesystem.
///
/// Paths are relative to the filesystem's own root; `/` denotes that root.
pub trait PathAccess: Send + Sync {
    fn open_file(&self, path: &Path) -> io::Result<Box<dyn ByteSource>>;

    fn exists(&self, path: &Path) -> bool;

    fn is_directory(&self, path: &Path) -> bool;

    /// Filesystem-relative paths of the entries directly inside `path`
    fn read_directory(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Translation between filesystem paths and the URLs the host sees
pub trait LogicalUrlAccess: Send + Sync {
    fn logical_url_for_path(&self, path: &Path) -> Option<Url>;

    fn path_for_logical_url(&self, url: &Url) -> Option<PathBuf>;
}
