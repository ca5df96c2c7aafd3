use gamebox_filetypes::registry::{HandlerOverrides, RegistryError, TypeRegistry, TypeSet};
use gamebox_filetypes::types::identifiers::*;
use gamebox_filetypes::types::{BundleKind, FileCategory, ImageFormat};
use std::path::Path;
use std::thread;
use url::Url;

#[test]
fn test_mountable_types_union_has_no_extras() {
    let registry = TypeRegistry::default();

    let mut union = TypeSet::new();
    union.extend(registry.hdd_volume_types());
    union.extend(registry.cd_volume_types());
    union.extend(registry.floppy_volume_types());
    union.extend(registry.mountable_image_types());

    assert_eq!(registry.mountable_types(), &union);
    assert!(!registry.mountable_types().contains(MOUNTABLE_FOLDER_TYPE));
    assert!(!registry.mountable_types().contains(EXE_PROGRAM_TYPE));
}

#[test]
fn test_cd_image_belongs_to_several_sets() {
    let registry = TypeRegistry::default();

    assert!(registry.mountable_image_types().contains(ISO_IMAGE_TYPE));
    assert!(registry.cd_volume_types().contains(ISO_IMAGE_TYPE));
    assert_eq!(
        registry.category_for_path(Path::new("game.iso")),
        FileCategory::DiskImage(ImageFormat::Iso)
    );
}

#[test]
fn test_every_extension_has_one_category() {
    let registry = TypeRegistry::default();

    let cases = [
        ("GAME.boxer", FileCategory::Gamebox),
        ("GAME.boxerstate", FileCategory::GameState),
        ("INSTALL.inst", FileCategory::DiskImage(ImageFormat::Cuesheet)),
        ("GOG.gog", FileCategory::DiskImage(ImageFormat::Iso)),
        ("DISK1.vfd", FileCategory::DiskImage(ImageFormat::VirtualPc)),
        ("DISK1.ima", FileCategory::DiskImage(ImageFormat::RawFloppy)),
        ("DISK1.img", FileCategory::DiskImage(ImageFormat::Ndif)),
        ("CD.cdmedia", FileCategory::DiskBundle(BundleKind::CdromBundle)),
        ("FILE_ID.DIZ", FileCategory::Documentation),
        ("Boxer.app", FileCategory::Unknown),
    ];

    for (name, expected) in cases {
        assert_eq!(registry.category_for_path(Path::new(name)), expected, "{name}");
    }
}

#[test]
fn test_executable_and_documentation_sets() {
    let registry = TypeRegistry::default();

    assert_eq!(registry.executable_types().len(), 3);
    assert!(registry.executable_types().contains(COM_PROGRAM_TYPE));
    assert!(registry.documentation_types().contains(PDF_TYPE));
    assert!(registry.macos_app_types().contains(APPLICATION_BUNDLE_TYPE));
    assert!(registry
        .mountable_folder_types()
        .contains(MOUNTABLE_FOLDER_TYPE));
}

#[test]
fn test_application_override_uses_extension_not_type() {
    let mut overrides = HandlerOverrides::new();
    overrides.insert("nfo", "org.example.NfoViewer").unwrap();
    let registry = TypeRegistry::new(overrides);

    // .nfo and .txt share the plain text identifier but only .nfo is overridden
    assert_eq!(
        registry.type_for_path(Path::new("a.nfo")),
        registry.type_for_path(Path::new("a.txt"))
    );

    let nfo = Url::parse("file:///games/warez/RELEASE.NFO").unwrap();
    let txt = Url::parse("file:///games/warez/RELEASE.TXT").unwrap();
    assert_eq!(
        registry.application_override(&nfo),
        Some("org.example.NfoViewer")
    );
    assert_eq!(registry.application_override(&txt), None);
}

#[test]
fn test_global_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| TypeRegistry::global() as *const TypeRegistry as usize))
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));

    let result = TypeRegistry::install(HandlerOverrides::new());
    assert!(matches!(result, Err(RegistryError::AlreadyInitialized)));
}
