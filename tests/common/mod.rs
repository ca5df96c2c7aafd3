//! Shared helpers for integration tests

#![allow(dead_code)]

use gamebox_filetypes::filesystem::{
    ImageError, ImageFilesystem, LocalFilesystem, MountError, VolumeMounter,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::{tempdir, TempDir};

/// Isolated directory for building test files
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temporary directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn filesystem(&self) -> LocalFilesystem {
        LocalFilesystem::new(self.path())
    }

    pub fn create_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}

/// MZ header whose relocation table offset marks a plain DOS program
pub fn dos_executable(relocation_table_offset: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; 0x1A];
    bytes[..2].copy_from_slice(b"MZ");
    bytes[0x18..0x1A].copy_from_slice(&relocation_table_offset.to_le_bytes());
    bytes
}

/// MZ header pointing at `signature` placed at `offset`
pub fn extended_executable(offset: u32, signature: &[u8]) -> Vec<u8> {
    assert!(offset >= 0x40, "extended header must follow the MZ header");
    let mut bytes = vec![0u8; offset as usize];
    bytes[..2].copy_from_slice(b"MZ");
    bytes[0x18..0x1A].copy_from_slice(&0x40u16.to_le_bytes());
    bytes[0x3C..0x40].copy_from_slice(&offset.to_le_bytes());
    bytes.extend_from_slice(signature);
    bytes
}

/// Mounter that reports a fixed mount point and counts its calls
pub struct StubMounter {
    pub mount_point: PathBuf,
    pub calls: AtomicUsize,
    pub detached: Mutex<Vec<PathBuf>>,
}

impl StubMounter {
    pub fn new(mount_point: impl Into<PathBuf>) -> Self {
        Self {
            mount_point: mount_point.into(),
            calls: AtomicUsize::new(0),
            detached: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn detached(&self) -> Vec<PathBuf> {
        self.detached.lock().unwrap().clone()
    }
}

impl VolumeMounter for StubMounter {
    fn mount(&self, _image: &Path) -> Result<PathBuf, MountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.mount_point.clone())
    }

    fn unmount(&self, mount_point: &Path) -> Result<(), MountError> {
        self.detached.lock().unwrap().push(mount_point.to_path_buf());
        Ok(())
    }
}

/// Mounter whose host tool always fails
pub struct FailingMounter;

impl VolumeMounter for FailingMounter {
    fn mount(&self, _image: &Path) -> Result<PathBuf, MountError> {
        Err(MountError::CommandFailed {
            status: "exit status: 1".to_string(),
            stderr: "hdiutil: attach failed - image not recognized".to_string(),
        })
    }

    fn unmount(&self, _mount_point: &Path) -> Result<(), MountError> {
        Err(MountError::CommandFailed {
            status: "exit status: 1".to_string(),
            stderr: "hdiutil: detach failed - No such file or directory".to_string(),
        })
    }
}

/// Image parser that exposes the directory next to the image
pub fn sibling_directory_images(image: &Path) -> Result<ImageFilesystem, ImageError> {
    if !image.exists() {
        return Err(ImageError::Io(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        )));
    }
    let parent = image.parent().unwrap_or_else(|| Path::new("/"));
    Ok(Box::new(LocalFilesystem::new(parent)))
}

/// Image parser that rejects everything
pub fn rejecting_images(_image: &Path) -> Result<ImageFilesystem, ImageError> {
    Err(ImageError::Corrupt {
        reason: "bad cue sheet".to_string(),
    })
}
