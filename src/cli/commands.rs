use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::executable::{
    CompatibilityChecker, ExecutableError, ExecutableErrorKind, ExecutableHeader,
    ExecutableSniffer,
};
use crate::filesystem::{
    AccessStrategy, FilesystemResolver, HdiutilMounter, LocalFilesystem, PathAccess,
};
use crate::registry::TypeRegistry;
use crate::types::FileCategory;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub kind: ExecutableErrorKind,
    pub code: i32,
    pub message: String,
}

impl From<&ExecutableError> for ErrorReport {
    fn from(error: &ExecutableError) -> Self {
        Self {
            kind: error.kind(),
            code: error.code(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub path: PathBuf,
    pub category: FileCategory,
    pub identifier: Option<&'static str>,
    pub derived_sets: Vec<&'static str>,
    pub is_directory: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SniffReport {
    pub path: PathBuf,
    pub header: Option<ExecutableHeader>,
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub path: PathBuf,
    pub compatible: bool,
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub path: PathBuf,
    pub strategy: Option<AccessStrategy>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenWithReport {
    pub path: PathBuf,
    /// `None` means the platform default handler
    pub application: Option<String>,
}

pub fn classify_paths(registry: &TypeRegistry, paths: &[PathBuf]) -> Vec<ClassificationReport> {
    paths
        .iter()
        .map(|path| {
            let identifier = registry.type_for_path(path);
            ClassificationReport {
                path: path.clone(),
                category: registry.category_for_path(path),
                identifier,
                derived_sets: identifier
                    .map(|id| registry.derived_sets_for(id))
                    .unwrap_or_default(),
                is_directory: path.is_dir(),
            }
        })
        .collect()
}

pub fn sniff_files(files: &[PathBuf]) -> Vec<SniffReport> {
    files
        .iter()
        .map(|path| {
            let (filesystem, relative) = local_access(path);
            let result = filesystem
                .open_file(&relative)
                .map_err(|e| ExecutableError::CouldNotReadExecutable {
                    location: path.display().to_string(),
                    source: e,
                })
                .and_then(|mut source| ExecutableSniffer::inspect(&mut source));

            match result {
                Ok(header) => SniffReport {
                    path: path.clone(),
                    header: Some(header),
                    error: None,
                },
                Err(e) => SniffReport {
                    path: path.clone(),
                    header: None,
                    error: Some(ErrorReport::from(&e)),
                },
            }
        })
        .collect()
}

pub fn check_files(registry: &TypeRegistry, files: &[PathBuf]) -> Vec<CompatibilityReport> {
    let checker = CompatibilityChecker::new(registry);
    files
        .iter()
        .map(|path| check_file(&checker, path))
        .collect()
}

fn check_file(checker: &CompatibilityChecker<'_>, path: &Path) -> CompatibilityReport {
    let (filesystem, relative) = local_access(path);
    match checker.is_compatible_path(&relative, &filesystem) {
        Ok(compatible) => CompatibilityReport {
            path: path.to_path_buf(),
            compatible,
            error: None,
        },
        Err(e) => CompatibilityReport {
            path: path.to_path_buf(),
            compatible: false,
            error: Some(ErrorReport::from(&e)),
        },
    }
}

pub fn select_strategies(registry: &TypeRegistry, paths: &[PathBuf]) -> Vec<StrategyReport> {
    let mut resolver = FilesystemResolver::new(registry);
    let mounter = HdiutilMounter::new();
    if mounter.is_available() {
        resolver = resolver.with_volume_mounter(Arc::new(mounter));
    } else {
        debug!("hdiutil not available, OS-mountable images fall back to the image parser");
    }

    paths
        .iter()
        .map(|path| match resolver.select_strategy_for_path(path) {
            Ok(strategy) => StrategyReport {
                path: path.clone(),
                strategy: Some(strategy),
                error: None,
            },
            Err(e) => StrategyReport {
                path: path.clone(),
                strategy: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

pub fn open_with(registry: &TypeRegistry, path: &Path) -> OpenWithReport {
    OpenWithReport {
        path: path.to_path_buf(),
        application: registry
            .application_override_for_path(path)
            .map(str::to_string),
    }
}

/// Walk `directory` and check every file that classifies as a program
pub fn scan_directory(
    registry: &TypeRegistry,
    directory: &Path,
    max_depth: Option<usize>,
) -> Vec<CompatibilityReport> {
    let checker = CompatibilityChecker::new(registry);
    let mut walker = WalkDir::new(directory).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| registry.category_for_path(entry.path()).is_program())
        .map(|entry| check_file(&checker, entry.path()))
        .collect()
}

/// Filesystem rooted at a file's parent directory, plus the file's path in it
fn local_access(path: &Path) -> (LocalFilesystem, PathBuf) {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path.file_name().map(PathBuf::from).unwrap_or_default();
    (LocalFilesystem::new(parent), Path::new("/").join(name))
}
