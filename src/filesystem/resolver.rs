//! Selection of a filesystem access strategy for a URL

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use super::error::{FilesystemError, Result};
use super::handle::{AccessStrategy, FilesystemHandle};
use super::image::ImageFilesystemFactory;
use super::local::LocalFilesystem;
use super::mounter::{MountedVolume, VolumeMounter};
use crate::registry::TypeRegistry;

/// Decides how to gain file-level access to a location and builds the
/// corresponding filesystem.
///
/// The first matching rule wins:
/// 1. images the host can mount, when a [`VolumeMounter`] is configured
/// 2. any other mountable image, through the [`ImageFilesystemFactory`]
/// 3. mountable folders and plain directories, read in place
///
/// Every call may block on disk I/O or on the host's mount tool.
pub struct FilesystemResolver<'a> {
    registry: &'a TypeRegistry,
    mounter: Option<Arc<dyn VolumeMounter>>,
    images: Option<Arc<dyn ImageFilesystemFactory>>,
}

impl<'a> FilesystemResolver<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            mounter: None,
            images: None,
        }
    }

    pub fn with_volume_mounter(mut self, mounter: Arc<dyn VolumeMounter>) -> Self {
        self.mounter = Some(mounter);
        self
    }

    pub fn with_image_filesystems(mut self, images: Arc<dyn ImageFilesystemFactory>) -> Self {
        self.images = Some(images);
        self
    }

    /// Pick a strategy for `url` without mounting or parsing anything
    pub fn select_strategy(&self, url: &Url) -> Result<AccessStrategy> {
        let path = file_path(url)?;
        self.select_strategy_for_path(&path)
    }

    pub fn select_strategy_for_path(&self, path: &Path) -> Result<AccessStrategy> {
        let identifier = self.registry.type_for_path(path);

        if let Some(identifier) = identifier {
            let os_mountable = self
                .registry
                .conforms_to_any(identifier, self.registry.os_mountable_image_types());
            if os_mountable && self.mounter.is_some() {
                debug!("{} is OS-mountable ({})", path.display(), identifier);
                return Ok(AccessStrategy::OsMount);
            }

            if self
                .registry
                .conforms_to_any(identifier, self.registry.mountable_image_types())
            {
                debug!("{} needs the image parser ({})", path.display(), identifier);
                return Ok(AccessStrategy::ImageParser);
            }
        }

        let is_mountable_folder = identifier.is_some_and(|identifier| {
            self.registry
                .conforms_to_any(identifier, self.registry.mountable_folder_types())
        });

        if path.is_dir() {
            debug!(
                "{} is a {}directory",
                path.display(),
                if is_mountable_folder { "mountable " } else { "" }
            );
            return Ok(AccessStrategy::Direct);
        }

        Err(FilesystemError::UnreadableSource {
            location: path.display().to_string(),
            reason: if is_mountable_folder {
                "mountable folder is not a directory".to_string()
            } else {
                "not a disk image or directory".to_string()
            },
        })
    }

    /// Build a filesystem for the contents of `url`
    pub fn resolve(&self, url: &Url) -> Result<FilesystemHandle> {
        let path = file_path(url)?;
        self.resolve_path(&path)
    }

    pub fn resolve_path(&self, path: &Path) -> Result<FilesystemHandle> {
        let strategy = self.select_strategy_for_path(path)?;
        info!("Resolving {} via {}", path.display(), strategy);

        match strategy {
            AccessStrategy::OsMount => self.mount(path),
            AccessStrategy::ImageParser => self.parse_image(path),
            AccessStrategy::Direct => Ok(FilesystemHandle::Local(LocalFilesystem::new(path))),
        }
    }

    fn mount(&self, path: &Path) -> Result<FilesystemHandle> {
        let mounter = self
            .mounter
            .as_ref()
            .ok_or_else(|| FilesystemError::unrecognized(path, "no volume mounter configured"))?;

        match mounter.mount(path) {
            Ok(mount_point) => {
                info!("Mounted {} at {}", path.display(), mount_point.display());
                Ok(FilesystemHandle::Mounted(MountedVolume::new(
                    path,
                    mount_point,
                )))
            }
            Err(e) => {
                warn!("Could not mount {}: {}", path.display(), e);
                Err(FilesystemError::unrecognized_by(
                    path,
                    "host could not mount the image",
                    e,
                ))
            }
        }
    }

    fn parse_image(&self, path: &Path) -> Result<FilesystemHandle> {
        let images = self
            .images
            .as_ref()
            .ok_or_else(|| FilesystemError::unrecognized(path, "no image filesystem available"))?;

        images
            .open(path)
            .map(FilesystemHandle::Image)
            .map_err(|e| {
                warn!("Could not parse image {}: {}", path.display(), e);
                FilesystemError::unrecognized_by(path, "image container could not be parsed", e)
            })
    }
}

fn file_path(url: &Url) -> Result<PathBuf> {
    url.to_file_path()
        .map_err(|_| FilesystemError::UnreadableSource {
            location: url.to_string(),
            reason: "not a local file URL".to_string(),
        })
}
