//! Process-wide registry of the type identifiers the front-end manages

use once_cell::sync::OnceCell;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use url::Url;

use super::error::RegistryError;
use super::overrides::HandlerOverrides;
use crate::types::identifiers::*;
use crate::types::FileCategory;

pub type TypeSet = BTreeSet<&'static str>;

static GLOBAL_REGISTRY: OnceCell<TypeRegistry> = OnceCell::new();

/// Extension (lowercase, no dot) to type identifier
const EXTENSION_TYPES: &[(&str, &str)] = &[
    ("boxer", GAMEBOX_TYPE),
    ("boxerstate", GAME_STATE_TYPE),
    ("floppy", FLOPPY_FOLDER_TYPE),
    ("harddisk", HARD_DISK_FOLDER_TYPE),
    ("cdrom", CDROM_FOLDER_TYPE),
    ("cue", CUESHEET_IMAGE_TYPE),
    ("inst", CUESHEET_IMAGE_TYPE),
    ("iso", ISO_IMAGE_TYPE),
    ("gog", ISO_IMAGE_TYPE),
    ("cdr", CDR_IMAGE_TYPE),
    ("vfd", VIRTUAL_PC_IMAGE_TYPE),
    ("ima", RAW_FLOPPY_IMAGE_TYPE),
    ("img", NDIF_IMAGE_TYPE),
    ("cdmedia", CDROM_IMAGE_BUNDLE_TYPE),
    ("exe", EXE_PROGRAM_TYPE),
    ("com", COM_PROGRAM_TYPE),
    ("bat", BATCH_PROGRAM_TYPE),
    ("app", APPLICATION_BUNDLE_TYPE),
    ("txt", PLAIN_TEXT_TYPE),
    ("nfo", PLAIN_TEXT_TYPE),
    ("diz", PLAIN_TEXT_TYPE),
    ("1st", PLAIN_TEXT_TYPE),
    ("me", PLAIN_TEXT_TYPE),
    ("now", PLAIN_TEXT_TYPE),
    ("faq", PLAIN_TEXT_TYPE),
    ("doc", WORD_DOCUMENT_TYPE),
    ("wri", WRITE_DOCUMENT_TYPE),
    ("rtf", RTF_TYPE),
    ("pdf", PDF_TYPE),
    ("html", HTML_TYPE),
    ("htm", HTML_TYPE),
    ("md", MARKDOWN_TYPE),
];

/// Child type to the base type it conforms to
const CONFORMANCES: &[(&str, &str)] = &[
    (FLOPPY_FOLDER_TYPE, MOUNTABLE_FOLDER_TYPE),
    (HARD_DISK_FOLDER_TYPE, MOUNTABLE_FOLDER_TYPE),
    (CDROM_FOLDER_TYPE, MOUNTABLE_FOLDER_TYPE),
    (CDROM_IMAGE_BUNDLE_TYPE, DISK_BUNDLE_TYPE),
];

/// Immutable category sets, extension table and handler overrides.
///
/// Build one with [`TypeRegistry::new`] for isolated use, or share the
/// process-wide instance through [`TypeRegistry::global`].
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    executable_types: TypeSet,
    macos_app_types: TypeSet,
    hdd_volume_types: TypeSet,
    cd_volume_types: TypeSet,
    floppy_volume_types: TypeSet,
    mountable_folder_types: TypeSet,
    mountable_image_types: TypeSet,
    os_mountable_image_types: TypeSet,
    mountable_types: TypeSet,
    documentation_types: TypeSet,
    extension_types: HashMap<&'static str, &'static str>,
    parents: HashMap<&'static str, &'static str>,
    file_handler_overrides: HandlerOverrides,
}

impl TypeRegistry {
    pub fn new(file_handler_overrides: HandlerOverrides) -> Self {
        let executable_types = set(&[EXE_PROGRAM_TYPE, COM_PROGRAM_TYPE, BATCH_PROGRAM_TYPE]);
        let macos_app_types = set(&[APPLICATION_BUNDLE_TYPE, APPLICATION_FILE_TYPE]);
        let hdd_volume_types = set(&[HARD_DISK_FOLDER_TYPE]);
        let cd_volume_types = set(&[
            CDROM_FOLDER_TYPE,
            ISO_IMAGE_TYPE,
            CDR_IMAGE_TYPE,
            CUESHEET_IMAGE_TYPE,
            CDROM_IMAGE_BUNDLE_TYPE,
        ]);
        let floppy_volume_types = set(&[
            FLOPPY_FOLDER_TYPE,
            VIRTUAL_PC_IMAGE_TYPE,
            RAW_FLOPPY_IMAGE_TYPE,
            NDIF_IMAGE_TYPE,
        ]);
        let mountable_folder_types = set(&[
            MOUNTABLE_FOLDER_TYPE,
            FLOPPY_FOLDER_TYPE,
            HARD_DISK_FOLDER_TYPE,
            CDROM_FOLDER_TYPE,
        ]);
        let mountable_image_types = set(&[
            ISO_IMAGE_TYPE,
            CDR_IMAGE_TYPE,
            CUESHEET_IMAGE_TYPE,
            VIRTUAL_PC_IMAGE_TYPE,
            RAW_FLOPPY_IMAGE_TYPE,
            NDIF_IMAGE_TYPE,
            CDROM_IMAGE_BUNDLE_TYPE,
        ]);
        // Formats hdiutil attaches natively. Everything else in
        // mountable_image_types needs the internal image parser.
        let os_mountable_image_types = set(&[ISO_IMAGE_TYPE, CDR_IMAGE_TYPE, NDIF_IMAGE_TYPE]);

        let mountable_types = hdd_volume_types
            .iter()
            .chain(&cd_volume_types)
            .chain(&floppy_volume_types)
            .chain(&mountable_image_types)
            .copied()
            .collect();

        let documentation_types = set(&[
            PLAIN_TEXT_TYPE,
            RTF_TYPE,
            HTML_TYPE,
            PDF_TYPE,
            WORD_DOCUMENT_TYPE,
            WRITE_DOCUMENT_TYPE,
            MARKDOWN_TYPE,
        ]);

        Self {
            executable_types,
            macos_app_types,
            hdd_volume_types,
            cd_volume_types,
            floppy_volume_types,
            mountable_folder_types,
            mountable_image_types,
            os_mountable_image_types,
            mountable_types,
            documentation_types,
            extension_types: EXTENSION_TYPES.iter().copied().collect(),
            parents: CONFORMANCES.iter().copied().collect(),
            file_handler_overrides,
        }
    }

    /// The process-wide registry, built with the builtin overrides on first
    /// use unless [`TypeRegistry::install`] ran earlier.
    pub fn global() -> &'static TypeRegistry {
        GLOBAL_REGISTRY.get_or_init(|| {
            tracing::debug!("Building default type registry");
            TypeRegistry::default()
        })
    }

    /// Install the process-wide registry with the given overrides.
    ///
    /// Only the first initialization wins; later calls fail.
    pub fn install(overrides: HandlerOverrides) -> Result<&'static TypeRegistry, RegistryError> {
        GLOBAL_REGISTRY
            .set(TypeRegistry::new(overrides))
            .map_err(|_| RegistryError::AlreadyInitialized)?;
        Ok(Self::global())
    }

    pub fn executable_types(&self) -> &TypeSet {
        &self.executable_types
    }

    pub fn macos_app_types(&self) -> &TypeSet {
        &self.macos_app_types
    }

    pub fn hdd_volume_types(&self) -> &TypeSet {
        &self.hdd_volume_types
    }

    pub fn cd_volume_types(&self) -> &TypeSet {
        &self.cd_volume_types
    }

    pub fn floppy_volume_types(&self) -> &TypeSet {
        &self.floppy_volume_types
    }

    pub fn mountable_folder_types(&self) -> &TypeSet {
        &self.mountable_folder_types
    }

    pub fn mountable_image_types(&self) -> &TypeSet {
        &self.mountable_image_types
    }

    /// Image formats the host operating system can attach as a volume itself
    pub fn os_mountable_image_types(&self) -> &TypeSet {
        &self.os_mountable_image_types
    }

    /// Union of the hard disk, CD-ROM, floppy and mountable image sets
    pub fn mountable_types(&self) -> &TypeSet {
        &self.mountable_types
    }

    pub fn documentation_types(&self) -> &TypeSet {
        &self.documentation_types
    }

    pub fn file_handler_overrides(&self) -> &HandlerOverrides {
        &self.file_handler_overrides
    }

    /// Application to open `url` with, or `None` for the platform default
    pub fn application_override(&self, url: &Url) -> Option<&str> {
        let last_segment = url.path_segments()?.next_back()?;
        self.application_override_for_path(Path::new(last_segment))
    }

    pub fn application_override_for_path(&self, path: &Path) -> Option<&str> {
        let extension = path.extension()?.to_str()?;
        self.file_handler_overrides.get(extension)
    }

    /// Type identifier for a path, judged by its extension alone
    pub fn type_for_path(&self, path: &Path) -> Option<&'static str> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        self.extension_types.get(extension.as_str()).copied()
    }

    pub fn type_for_url(&self, url: &Url) -> Option<&'static str> {
        let last_segment = url.path_segments()?.next_back()?;
        self.type_for_path(Path::new(last_segment))
    }

    /// Primary category of a path
    pub fn category_for_path(&self, path: &Path) -> FileCategory {
        self.type_for_path(path)
            .map(FileCategory::from_identifier)
            .unwrap_or(FileCategory::Unknown)
    }

    /// Whether `identifier` is `parent` or descends from it
    pub fn conforms_to(&self, identifier: &str, parent: &str) -> bool {
        let mut current = identifier;
        loop {
            if current == parent {
                return true;
            }
            match self.parents.get(current) {
                Some(next) => current = *next,
                None => return false,
            }
        }
    }

    pub fn conforms_to_any(&self, identifier: &str, types: &TypeSet) -> bool {
        types.iter().any(|parent| self.conforms_to(identifier, parent))
    }

    /// Names of every derived set `identifier` belongs to
    pub fn derived_sets_for(&self, identifier: &str) -> Vec<&'static str> {
        self.named_sets()
            .into_iter()
            .filter(|(_, types)| self.conforms_to_any(identifier, types))
            .map(|(name, _)| name)
            .collect()
    }

    fn named_sets(&self) -> [(&'static str, &TypeSet); 10] {
        [
            ("executable", &self.executable_types),
            ("macos_app", &self.macos_app_types),
            ("hdd_volume", &self.hdd_volume_types),
            ("cd_volume", &self.cd_volume_types),
            ("floppy_volume", &self.floppy_volume_types),
            ("mountable_folder", &self.mountable_folder_types),
            ("mountable_image", &self.mountable_image_types),
            ("os_mountable_image", &self.os_mountable_image_types),
            ("mountable", &self.mountable_types),
            ("documentation", &self.documentation_types),
        ]
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(HandlerOverrides::builtin())
    }
}

fn set(types: &[&'static str]) -> TypeSet {
    types.iter().copied().collect()
}
