//! Core services wired to real adapters.

use std::path::Path;

use kiln_adapters::{ArchiveFileSink, LocalFilesystem, MemoryFilesystem, MemorySink};
use kiln_core::{
    application::{ApplicationError, ScaffoldService},
    error::KilnError,
    prelude::*,
};
use tempfile::TempDir;

fn manifest(name: &str) -> Manifest {
    Manifest::builder()
        .framework(Framework::React)
        .language(Language::Ts)
        .styling(Styling::Tailwind)
        .package_manager(PackageManager::Pnpm)
        .name(name)
        .lint(true)
        .prettier(true)
        .build()
        .unwrap()
}

#[test]
fn extract_into_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let root = service.scaffold(&manifest("mem-app"), "/work", false).unwrap();
    assert_eq!(root, Path::new("/work/mem-app"));

    let artifacts = generate_scaffold(&manifest("mem-app")).unwrap();
    assert_eq!(fs.list_files().len(), artifacts.len());
    assert!(
        fs.read_file(Path::new("/work/mem-app/src/App.tsx"))
            .is_some()
    );
}

#[test]
fn failed_extract_leaves_nothing_behind() {
    let fs = MemoryFilesystem::new();
    fs.deny_writes_under("/work/broken/src");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    assert!(service.scaffold(&manifest("broken"), "/work", false).is_err());
    assert!(!fs.exists(Path::new("/work/broken")));
    assert!(fs.list_files().is_empty());
}

#[test]
fn extract_to_disk_and_refuse_second_run() {
    let temp = TempDir::new().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    let root = service.scaffold(&manifest("disk-app"), temp.path(), false).unwrap();
    let pkg = std::fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"disk-app\""));
    assert!(root.join("postcss.config.mjs").is_file());

    let err = service
        .scaffold(&manifest("disk-app"), temp.path(), false)
        .unwrap_err();
    assert!(matches!(
        err,
        KilnError::Application(ApplicationError::ProjectExists { .. })
    ));

    service.scaffold(&manifest("disk-app"), temp.path(), true).unwrap();
}

#[tokio::test]
async fn archive_lands_in_output_directory() {
    let temp = TempDir::new().unwrap();
    let sink = ArchiveFileSink::new(temp.path());
    let m = manifest("zipped");
    let artifacts = generate_scaffold(&m).unwrap();

    generate_and_deliver(&artifacts, &m, &sink).await.unwrap();

    let bytes = std::fs::read(temp.path().join("zipped-scaffold.zip")).unwrap();
    assert_eq!(unpack(&bytes).unwrap(), artifacts);
}

#[tokio::test]
async fn memory_sink_receives_exactly_one_archive() {
    let sink = MemorySink::new();
    let m = manifest("captured");
    let artifacts = generate_scaffold(&m).unwrap();

    generate_and_deliver(&artifacts, &m, &sink).await.unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.deliveries()[0].0, "captured-scaffold.zip");
}
