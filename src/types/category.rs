use serde::{Deserialize, Serialize};
use std::fmt;

use super::identifiers::*;

/// Kind of folder that can be mounted as a DOS drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderKind {
    Floppy,
    HardDisk,
    #[serde(rename = "CDROM")]
    Cdrom,
}

/// Disk image container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Cuesheet,
    #[serde(rename = "ISO")]
    Iso,
    #[serde(rename = "CDR")]
    Cdr,
    VirtualPc,
    RawFloppy,
    #[serde(rename = "NDIF")]
    Ndif,
}

/// Folder bundles wrapping one or more image files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BundleKind {
    #[serde(rename = "CDROMBundle")]
    CdromBundle,
}

/// DOS program containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramKind {
    #[serde(rename = "EXE")]
    Exe,
    #[serde(rename = "COM")]
    Com,
    #[serde(rename = "BAT")]
    Bat,
}

/// Primary category of a file or folder.
///
/// Every extension maps to exactly one category. The broader derived sets
/// exposed by [`TypeRegistry`](crate::registry::TypeRegistry) may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "kind")]
pub enum FileCategory {
    Gamebox,
    GameState,
    MountableFolder(FolderKind),
    DiskImage(ImageFormat),
    DiskBundle(BundleKind),
    Program(ProgramKind),
    Documentation,
    Unknown,
}

impl FileCategory {
    /// The type identifier for this category.
    ///
    /// Documentation spans several identifiers and `Unknown` has none, so both
    /// return `None`.
    pub fn identifier(&self) -> Option<&'static str> {
        let id = match self {
            FileCategory::Gamebox => GAMEBOX_TYPE,
            FileCategory::GameState => GAME_STATE_TYPE,
            FileCategory::MountableFolder(FolderKind::Floppy) => FLOPPY_FOLDER_TYPE,
            FileCategory::MountableFolder(FolderKind::HardDisk) => HARD_DISK_FOLDER_TYPE,
            FileCategory::MountableFolder(FolderKind::Cdrom) => CDROM_FOLDER_TYPE,
            FileCategory::DiskImage(ImageFormat::Cuesheet) => CUESHEET_IMAGE_TYPE,
            FileCategory::DiskImage(ImageFormat::Iso) => ISO_IMAGE_TYPE,
            FileCategory::DiskImage(ImageFormat::Cdr) => CDR_IMAGE_TYPE,
            FileCategory::DiskImage(ImageFormat::VirtualPc) => VIRTUAL_PC_IMAGE_TYPE,
            FileCategory::DiskImage(ImageFormat::RawFloppy) => RAW_FLOPPY_IMAGE_TYPE,
            FileCategory::DiskImage(ImageFormat::Ndif) => NDIF_IMAGE_TYPE,
            FileCategory::DiskBundle(BundleKind::CdromBundle) => CDROM_IMAGE_BUNDLE_TYPE,
            FileCategory::Program(ProgramKind::Exe) => EXE_PROGRAM_TYPE,
            FileCategory::Program(ProgramKind::Com) => COM_PROGRAM_TYPE,
            FileCategory::Program(ProgramKind::Bat) => BATCH_PROGRAM_TYPE,
            FileCategory::Documentation | FileCategory::Unknown => return None,
        };
        Some(id)
    }

    /// Map a type identifier back onto its primary category
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            GAMEBOX_TYPE => FileCategory::Gamebox,
            GAME_STATE_TYPE => FileCategory::GameState,
            FLOPPY_FOLDER_TYPE => FileCategory::MountableFolder(FolderKind::Floppy),
            HARD_DISK_FOLDER_TYPE => FileCategory::MountableFolder(FolderKind::HardDisk),
            CDROM_FOLDER_TYPE => FileCategory::MountableFolder(FolderKind::Cdrom),
            CUESHEET_IMAGE_TYPE => FileCategory::DiskImage(ImageFormat::Cuesheet),
            ISO_IMAGE_TYPE => FileCategory::DiskImage(ImageFormat::Iso),
            CDR_IMAGE_TYPE => FileCategory::DiskImage(ImageFormat::Cdr),
            VIRTUAL_PC_IMAGE_TYPE => FileCategory::DiskImage(ImageFormat::VirtualPc),
            RAW_FLOPPY_IMAGE_TYPE => FileCategory::DiskImage(ImageFormat::RawFloppy),
            NDIF_IMAGE_TYPE => FileCategory::DiskImage(ImageFormat::Ndif),
            CDROM_IMAGE_BUNDLE_TYPE => FileCategory::DiskBundle(BundleKind::CdromBundle),
            EXE_PROGRAM_TYPE => FileCategory::Program(ProgramKind::Exe),
            COM_PROGRAM_TYPE => FileCategory::Program(ProgramKind::Com),
            BATCH_PROGRAM_TYPE => FileCategory::Program(ProgramKind::Bat),
            PLAIN_TEXT_TYPE | RTF_TYPE | HTML_TYPE | PDF_TYPE | WORD_DOCUMENT_TYPE
            | WRITE_DOCUMENT_TYPE | MARKDOWN_TYPE => FileCategory::Documentation,
            _ => FileCategory::Unknown,
        }
    }

    pub fn is_program(&self) -> bool {
        matches!(self, FileCategory::Program(_))
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCategory::Gamebox => write!(f, "gamebox"),
            FileCategory::GameState => write!(f, "game state"),
            FileCategory::MountableFolder(kind) => write!(f, "mountable folder ({kind:?})"),
            FileCategory::DiskImage(format) => write!(f, "disk image ({format:?})"),
            FileCategory::DiskBundle(kind) => write!(f, "disk bundle ({kind:?})"),
            FileCategory::Program(kind) => write!(f, "program ({kind:?})"),
            FileCategory::Documentation => write!(f, "documentation"),
            FileCategory::Unknown => write!(f, "unknown"),
        }
    }
}
