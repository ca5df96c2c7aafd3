//! Type identifier constants
//!
//! These strings are shared with the packaging layer's file associations and
//! must not change.

/// `.boxer`
pub const GAMEBOX_TYPE: &str = "net.washboardabs.boxer-game-package";
/// `.boxerstate`
pub const GAME_STATE_TYPE: &str = "net.washboardabs.boxer-game-state";

/// Base type for `.floppy`, `.harddisk` and `.cdrom` folders
pub const MOUNTABLE_FOLDER_TYPE: &str = "net.washboardabs.boxer-mountable-folder";
/// `.floppy`
pub const FLOPPY_FOLDER_TYPE: &str = "net.washboardabs.boxer-floppy-folder";
/// `.harddisk`
pub const HARD_DISK_FOLDER_TYPE: &str = "net.washboardabs.boxer-harddisk-folder";
/// `.cdrom`
pub const CDROM_FOLDER_TYPE: &str = "net.washboardabs.boxer-cdrom-folder";

/// `.cue` / `.inst`
pub const CUESHEET_IMAGE_TYPE: &str = "com.goldenhawk.cdrwin-cuesheet";
/// `.iso` / `.gog`
pub const ISO_IMAGE_TYPE: &str = "public.iso-image";
/// `.cdr`
pub const CDR_IMAGE_TYPE: &str = "com.apple.disk-image-cdr";
/// `.vfd`
pub const VIRTUAL_PC_IMAGE_TYPE: &str = "com.microsoft.virtualpc-disk-image";
/// `.ima`
pub const RAW_FLOPPY_IMAGE_TYPE: &str = "com.winimage.raw-disk-image";
/// `.img`
pub const NDIF_IMAGE_TYPE: &str = "com.apple.disk-image-ndif";

/// Base type for `.cdmedia`
pub const DISK_BUNDLE_TYPE: &str = "net.washboardabs.boxer-disk-bundle";
/// `.cdmedia`
pub const CDROM_IMAGE_BUNDLE_TYPE: &str = "net.washboardabs.boxer-cdrom-bundle";

/// `.exe`
pub const EXE_PROGRAM_TYPE: &str = "com.microsoft.windows-executable";
/// `.com`
pub const COM_PROGRAM_TYPE: &str = "com.microsoft.msdos-executable";
/// `.bat`
pub const BATCH_PROGRAM_TYPE: &str = "com.microsoft.batch-file";

pub const APPLICATION_BUNDLE_TYPE: &str = "com.apple.application-bundle";
pub const APPLICATION_FILE_TYPE: &str = "com.apple.application-file";

pub const PLAIN_TEXT_TYPE: &str = "public.plain-text";
pub const RTF_TYPE: &str = "public.rtf";
pub const HTML_TYPE: &str = "public.html";
pub const PDF_TYPE: &str = "com.adobe.pdf";
pub const WORD_DOCUMENT_TYPE: &str = "com.microsoft.word.doc";
pub const WRITE_DOCUMENT_TYPE: &str = "com.microsoft.write.wri";
pub const MARKDOWN_TYPE: &str = "net.daringfireball.markdown";
