//! Adapter behavior against the in-memory and the real filesystem.

use std::path::Path;

use ideaforge_adapters::{LocalFilesystem, MemoryFilesystem};
use ideaforge_core::application::ports::Filesystem;
use ideaforge_core::application::{ExportOptions, ExportService};
use ideaforge_core::domain::GenerateRequest;
use ideaforge_core::generate::Generator;

#[test]
fn local_filesystem_round_trips_files() {
    let dir = tempfile::tempdir().unwrap();
    let fs = LocalFilesystem::new();

    let nested = dir.path().join("a/b");
    fs.create_dir_all(&nested).unwrap();
    assert!(fs.exists(&nested));

    let file = nested.join("x.txt");
    fs.write_file(&file, "hello").unwrap();
    assert!(fs.exists(&file));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");

    fs.remove_dir_all(&dir.path().join("a")).unwrap();
    assert!(!fs.exists(&file));
}

#[test]
fn local_write_into_missing_directory_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let fs = LocalFilesystem::new();

    let target = dir.path().join("missing/x.txt");
    let error = fs.write_file(&target, "hello").unwrap_err();
    assert!(error.to_string().contains("x.txt"));
}

#[test]
fn memory_filesystem_requires_parents() {
    let fs = MemoryFilesystem::new();
    assert!(fs.write_file(Path::new("a/b/x.txt"), "hi").is_err());

    fs.create_dir_all(Path::new("a/b")).unwrap();
    fs.write_file(Path::new("a/b/x.txt"), "hi").unwrap();
    assert_eq!(fs.read_file(Path::new("a/b/x.txt")).unwrap(), "hi");
}

#[test]
fn memory_remove_dir_all_clears_the_subtree() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("root/sub")).unwrap();
    fs.write_file(Path::new("root/sub/file.js"), "x").unwrap();
    fs.create_dir_all(Path::new("other")).unwrap();

    fs.remove_dir_all(Path::new("root")).unwrap();

    assert!(!fs.exists(Path::new("root")));
    assert!(!fs.exists(Path::new("root/sub")));
    assert!(!fs.exists(Path::new("root/sub/file.js")));
    assert!(fs.exists(Path::new("other")));
}

#[test]
fn export_service_writes_a_blueprint_through_the_memory_adapter() {
    let blueprint = Generator::new()
        .generate(&GenerateRequest::new("a quiz site for students").with_samples(true));

    let fs = MemoryFilesystem::new();
    let service = ExportService::new(Box::new(fs.clone()));

    let report = service
        .export(&blueprint.files, "out/quiz", &ExportOptions::default())
        .unwrap();
    assert_eq!(report.files_written, blueprint.files.len());

    let manifest = fs.read_file(Path::new("out/quiz/package.json")).unwrap();
    assert!(manifest.contains("\"private\": true"));
    assert!(fs.read_file(Path::new("out/quiz/pages/index.js")).is_some());
    assert!(fs
        .read_file(Path::new("out/quiz/recommended/backend_go/main.go"))
        .is_some());
}

#[test]
fn export_service_writes_to_real_disk_and_refuses_a_second_run() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("demo");
    let blueprint = Generator::new().generate(&GenerateRequest::new("notes"));

    let service = ExportService::new(Box::new(LocalFilesystem::new()));
    service
        .export(&blueprint.files, &target, &ExportOptions::default())
        .unwrap();

    assert!(target.join("package.json").is_file());
    assert!(target.join("pages/api/project.js").is_file());
    assert!(target.join("styles/globals.css").is_file());

    let again = service.export(&blueprint.files, &target, &ExportOptions::default());
    assert!(again.is_err());

    // Overwrite replaces the tree instead of failing.
    let options = ExportOptions { overwrite: true };
    service.export(&blueprint.files, &target, &options).unwrap();
    assert!(target.join("package.json").is_file());
}
