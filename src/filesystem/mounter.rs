//! OS-level disk image mounting

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

use super::access::{ByteSource, LogicalUrlAccess, PathAccess};
use super::error::MountError;
use super::local::LocalFilesystem;
use url::Url;

/// Host facility that attaches a disk image as a real volume
pub trait VolumeMounter: Send + Sync {
    /// Mount `image` and return the host directory its volume appears at
    fn mount(&self, image: &Path) -> Result<PathBuf, MountError>;

    /// Release a volume previously returned by [`VolumeMounter::mount`]
    fn unmount(&self, mount_point: &Path) -> Result<(), MountError>;
}

/// Volume attached by the host, browsed directly through its mount point
#[derive(Debug, Clone)]
pub struct MountedVolume {
    image: PathBuf,
    volume: LocalFilesystem,
}

impl MountedVolume {
    pub fn new(image: impl Into<PathBuf>, mount_point: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            volume: LocalFilesystem::new(mount_point),
        }
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn mount_point(&self) -> &Path {
        self.volume.base()
    }

    /// Release the volume through the mounter that attached it.
    ///
    /// Volumes stay attached until this is called; dropping the handle
    /// does not detach anything.
    pub fn detach(self, mounter: &dyn VolumeMounter) -> Result<(), MountError> {
        debug!(
            "Detaching {} from {}",
            self.image.display(),
            self.mount_point().display()
        );
        mounter.unmount(self.mount_point())
    }
}

impl PathAccess for MountedVolume {
    fn open_file(&self, path: &Path) -> io::Result<Box<dyn ByteSource>> {
        self.volume.open_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.volume.exists(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.volume.is_directory(path)
    }

    fn read_directory(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        self.volume.read_directory(path)
    }
}

impl LogicalUrlAccess for MountedVolume {
    fn logical_url_for_path(&self, path: &Path) -> Option<Url> {
        self.volume.logical_url_for_path(path)
    }

    fn path_for_logical_url(&self, url: &Url) -> Option<PathBuf> {
        self.volume.path_for_logical_url(url)
    }
}

/// Mounts images through macOS's `hdiutil`
#[derive(Debug, Clone)]
pub struct HdiutilMounter {
    executable: Option<PathBuf>,
}

impl HdiutilMounter {
    pub fn new() -> Self {
        Self {
            executable: which::which("hdiutil").ok(),
        }
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.executable.is_some()
    }
}

impl Default for HdiutilMounter {
    fn default() -> Self {
        Self::new()
    }
}

impl HdiutilMounter {
    fn run(&self, args: &[&OsStr]) -> Result<String, MountError> {
        let executable = self
            .executable
            .as_ref()
            .ok_or_else(|| MountError::ToolNotFound {
                tool: "hdiutil".to_string(),
            })?;

        debug!("Running {} {:?}", executable.display(), args);
        let output = Command::new(executable).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(MountError::CommandFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VolumeMounter for HdiutilMounter {
    fn mount(&self, image: &Path) -> Result<PathBuf, MountError> {
        let mut args = vec![OsStr::new("attach"), image.as_os_str()];
        args.extend(
            ["-readonly", "-nobrowse", "-noverify", "-noautoopen"]
                .into_iter()
                .map(OsStr::new),
        );

        let stdout = self.run(&args).inspect_err(|e| {
            warn!("hdiutil failed to attach {}: {}", image.display(), e);
        })?;

        parse_mount_point(&stdout).ok_or_else(|| MountError::NoMountPoint {
            image: image.to_path_buf(),
        })
    }

    fn unmount(&self, mount_point: &Path) -> Result<(), MountError> {
        self.run(&[OsStr::new("detach"), mount_point.as_os_str()])
            .map(|_| ())
            .inspect_err(|e| {
                warn!("hdiutil failed to detach {}: {}", mount_point.display(), e);
            })
    }
}

/// Pull the mount point out of `hdiutil attach` output.
///
/// Each line is `device<TAB>content hint<TAB>mount point`; only volume
/// entries carry the third column.
fn parse_mount_point(output: &str) -> Option<PathBuf> {
    output
        .lines()
        .filter_map(|line| line.split('\t').nth(2))
        .map(str::trim)
        .filter(|mount_point| mount_point.starts_with('/'))
        .last()
        .map(PathBuf::from)
}
