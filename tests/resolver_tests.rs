mod common;

use common::{
    rejecting_images, sibling_directory_images, FailingMounter, StubMounter, TestEnvironment,
};
use gamebox_filetypes::filesystem::{
    AccessStrategy, FilesystemError, FilesystemHandle, FilesystemResolver, ImageError, MountError,
    MountedVolume,
};
use gamebox_filetypes::registry::TypeRegistry;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use url::Url;

#[test]
fn test_iso_with_working_mounter_is_logical_url_capable() {
    let env = TestEnvironment::new();
    let image = env.create_file("DOOM.ISO", b"CD001");
    let volume = env.create_dir("Volumes/DOOM");
    std::fs::write(volume.join("DOOM.EXE"), b"MZ").unwrap();

    let mounter = Arc::new(StubMounter::new(&volume));
    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry)
        .with_volume_mounter(mounter.clone())
        .with_image_filesystems(Arc::new(sibling_directory_images));

    let url = Url::from_file_path(&image).unwrap();
    let handle = resolver.resolve(&url).unwrap();

    assert_eq!(handle.strategy(), AccessStrategy::OsMount);
    assert_eq!(mounter.call_count(), 1);
    assert!(handle.path_access().exists(Path::new("/DOOM.EXE")));

    let logical = handle.logical_url_access().expect("mounted volumes map URLs");
    let file_url = logical.logical_url_for_path(Path::new("/DOOM.EXE")).unwrap();
    assert_eq!(file_url.to_file_path().unwrap(), volume.join("DOOM.EXE"));

    match handle {
        FilesystemHandle::Mounted(mounted) => {
            assert_eq!(mounted.image(), image.as_path());
            assert_eq!(mounted.mount_point(), volume.as_path());
            assert!(mounter.detached().is_empty());

            mounted.detach(&*mounter).unwrap();
            assert_eq!(mounter.detached(), vec![volume.clone()]);
        }
        other => panic!("expected a mounted volume, got {other:?}"),
    }
}

#[test]
fn test_detach_failure_is_reported() {
    let env = TestEnvironment::new();
    let volume = env.create_dir("Volumes/KEEN");
    let mounted = MountedVolume::new(env.path().join("KEEN.ISO"), &volume);

    let result = mounted.detach(&FailingMounter);
    assert!(matches!(result, Err(MountError::CommandFailed { .. })));
}

#[test]
fn test_cue_uses_internal_image_parser() {
    let env = TestEnvironment::new();
    let cue = env.create_file("QUAKE/QUAKE.CUE", b"FILE \"QUAKE.BIN\" BINARY\n");
    env.create_file("QUAKE/QUAKE.BIN", &[0u8; 16]);

    let mounter = Arc::new(StubMounter::new("/Volumes/never"));
    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry)
        .with_volume_mounter(mounter.clone())
        .with_image_filesystems(Arc::new(sibling_directory_images));

    let handle = resolver.resolve(&Url::from_file_path(&cue).unwrap()).unwrap();

    assert_eq!(handle.strategy(), AccessStrategy::ImageParser);
    assert!(handle.logical_url_access().is_none());
    assert!(handle.path_access().exists(Path::new("/QUAKE.BIN")));
    assert_eq!(mounter.call_count(), 0);
}

#[test]
fn test_raw_floppy_and_bundles_use_image_parser() {
    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry)
        .with_volume_mounter(Arc::new(StubMounter::new("/Volumes/X")));

    for name in ["/games/DISK1.IMA", "/games/DISK1.VFD", "/games/CD.cdmedia"] {
        assert_eq!(
            resolver.select_strategy_for_path(Path::new(name)).unwrap(),
            AccessStrategy::ImageParser,
            "{name}"
        );
    }
    for name in ["/games/CD.iso", "/games/CD.cdr", "/games/DISK.img"] {
        assert_eq!(
            resolver.select_strategy_for_path(Path::new(name)).unwrap(),
            AccessStrategy::OsMount,
            "{name}"
        );
    }
}

#[test]
fn test_mount_failure_surfaces_as_unrecognized_image() {
    let env = TestEnvironment::new();
    let image = env.create_file("BROKEN.CDR", b"garbage");

    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry)
        .with_volume_mounter(Arc::new(FailingMounter))
        .with_image_filesystems(Arc::new(sibling_directory_images));

    let error = resolver
        .resolve(&Url::from_file_path(&image).unwrap())
        .unwrap_err();
    match &error {
        FilesystemError::UnrecognizedImageFormat { path, .. } => assert_eq!(path, &image),
        other => panic!("unexpected error: {other}"),
    }

    let source = Error::source(&error).expect("mount failure is kept as the source");
    match source.downcast_ref::<MountError>() {
        Some(MountError::CommandFailed { stderr, .. }) => {
            assert!(stderr.contains("image not recognized"));
        }
        other => panic!("unexpected source: {other:?}"),
    }
}

#[test]
fn test_parse_failure_surfaces_as_unrecognized_image() {
    let env = TestEnvironment::new();
    let image = env.create_file("BAD.CUE", b"not a cue sheet");

    let registry = TypeRegistry::default();
    let resolver =
        FilesystemResolver::new(&registry).with_image_filesystems(Arc::new(rejecting_images));

    let error = resolver
        .resolve(&Url::from_file_path(&image).unwrap())
        .unwrap_err();
    assert!(matches!(
        error,
        FilesystemError::UnrecognizedImageFormat { .. }
    ));

    let source = Error::source(&error).expect("parse failure is kept as the source");
    assert!(matches!(
        source.downcast_ref::<ImageError>(),
        Some(ImageError::Corrupt { .. })
    ));
}

#[test]
fn test_missing_image_parser_has_no_underlying_cause() {
    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry);

    let error = resolver
        .resolve_path(Path::new("/nonexistent/GAME.CUE"))
        .unwrap_err();
    match &error {
        FilesystemError::UnrecognizedImageFormat { reason, .. } => {
            assert!(reason.contains("no image filesystem"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(Error::source(&error).is_none());
}

#[test]
fn test_folders_are_read_in_place() {
    let env = TestEnvironment::new();
    let plain = env.create_dir("KEEN");
    let cdrom = env.create_dir("KEEN.boxer/D.cdrom");
    env.create_file("KEEN.boxer/D.cdrom/README.TXT", b"hi");

    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry);

    let handle = resolver
        .resolve(&Url::from_directory_path(&plain).unwrap())
        .unwrap();
    assert_eq!(handle.strategy(), AccessStrategy::Direct);

    let handle = resolver.resolve_path(&cdrom).unwrap();
    assert_eq!(handle.strategy(), AccessStrategy::Direct);
    assert!(handle.path_access().exists(Path::new("/README.TXT")));
    assert!(handle.logical_url_access().is_some());
}

#[test]
fn test_unknown_files_are_unreadable_sources() {
    let env = TestEnvironment::new();
    let exe = env.create_file("GAME.EXE", b"MZ");
    let fake_folder = env.create_file("A.floppy", b"not a folder");

    let registry = TypeRegistry::default();
    let resolver = FilesystemResolver::new(&registry);

    for path in [exe, fake_folder] {
        let result = resolver.resolve(&Url::from_file_path(&path).unwrap());
        assert!(
            matches!(result, Err(FilesystemError::UnreadableSource { .. })),
            "{}",
            path.display()
        );
    }
}
