use serde::{Deserialize, Serialize};
use std::fmt;

use super::access::{LogicalUrlAccess, PathAccess};
use super::image::ImageFilesystem;
use super::local::LocalFilesystem;
use super::mounter::MountedVolume;

/// How file-level access to a location is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStrategy {
    /// The host mounts the image as a volume
    OsMount,
    /// The image container is parsed internally
    ImageParser,
    /// The location is a directory and is read in place
    Direct,
}

impl fmt::Display for AccessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessStrategy::OsMount => "OS mount",
            AccessStrategy::ImageParser => "image parser",
            AccessStrategy::Direct => "direct",
        };
        f.write_str(name)
    }
}

/// Filesystem produced by the resolver, owned by the caller
pub enum FilesystemHandle {
    Local(LocalFilesystem),
    Mounted(MountedVolume),
    Image(ImageFilesystem),
}

impl FilesystemHandle {
    pub fn strategy(&self) -> AccessStrategy {
        match self {
            FilesystemHandle::Local(_) => AccessStrategy::Direct,
            FilesystemHandle::Mounted(_) => AccessStrategy::OsMount,
            FilesystemHandle::Image(_) => AccessStrategy::ImageParser,
        }
    }

    pub fn path_access(&self) -> &dyn PathAccess {
        match self {
            FilesystemHandle::Local(filesystem) => filesystem,
            FilesystemHandle::Mounted(volume) => volume,
            FilesystemHandle::Image(filesystem) => &**filesystem,
        }
    }

    /// Image-parsing filesystems have no host URLs for their contents
    pub fn logical_url_access(&self) -> Option<&dyn LogicalUrlAccess> {
        match self {
            FilesystemHandle::Local(filesystem) => Some(filesystem),
            FilesystemHandle::Mounted(volume) => Some(volume),
            FilesystemHandle::Image(_) => None,
        }
    }
}

impl fmt::Debug for FilesystemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilesystemHandle::Local(filesystem) => f.debug_tuple("Local").field(filesystem).finish(),
            FilesystemHandle::Mounted(volume) => f.debug_tuple("Mounted").field(volume).finish(),
            FilesystemHandle::Image(_) => f.write_str("Image(..)"),
        }
    }
}
