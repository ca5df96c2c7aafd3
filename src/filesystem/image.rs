use std::path::Path;

use super::access::PathAccess;
use super::error::ImageError;

/// Filesystem over the contents of a disk image that the host cannot mount
/// itself (cue/bin pairs, raw floppy dumps, image bundles)
pub type ImageFilesystem = Box<dyn PathAccess>;

/// Builds an image-parsing filesystem for a disk image
pub trait ImageFilesystemFactory: Send + Sync {
    fn open(&self, image: &Path) -> Result<ImageFilesystem, ImageError>;
}

impl<F> ImageFilesystemFactory for F
where
    F: Fn(&Path) -> Result<ImageFilesystem, ImageError> + Send + Sync,
{
    fn open(&self, image: &Path) -> Result<ImageFilesystem, ImageError> {
        self(image)
    }
}
