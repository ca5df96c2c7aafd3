//! Filesystem capabilities and access-strategy resolution

pub mod access;
pub mod error;
pub mod handle;
pub mod image;
pub mod local;
pub mod mounter;
pub mod resolver;

pub use access::{ByteSource, LogicalUrlAccess, PathAccess};
pub use error::{FilesystemError, ImageError, MountError};
pub use handle::{AccessStrategy, FilesystemHandle};
pub use image::{ImageFilesystem, ImageFilesystemFactory};
pub use local::LocalFilesystem;
pub use mounter::{HdiutilMounter, MountedVolume, VolumeMounter};
pub use resolver::FilesystemResolver;
