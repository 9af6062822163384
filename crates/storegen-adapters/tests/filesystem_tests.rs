//! Full command runs against the real writers.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use storegen_adapters::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
use storegen_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

const NAMESPACE: &str = "com.example.mongo_migrate_multids";

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn add_station() -> Vec<String> {
    tokens(&["entity", "add", "stations", "Station", "String"])
}

fn context_in(project: &Path) -> Context {
    let root = Context::resolve_root(project, Path::new("src/main/java"), NAMESPACE);
    Context::new(NAMESPACE, root).unwrap()
}

/// Relative path -> content for every file under `dir`.
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, String> {
    WalkDir::new(dir)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(dir).unwrap().to_path_buf();
            let content = std::fs::read_to_string(entry.path()).unwrap();
            (relative, content)
        })
        .collect()
}

#[test]
fn writes_seven_files_under_an_empty_root() {
    let project = TempDir::new().unwrap();
    let ctx = context_in(project.path());
    std::fs::create_dir_all(ctx.root_dir()).unwrap();

    let service = CommandService::with_builtin_commands(Box::new(LocalFilesystem::new())).unwrap();
    service.dispatch(&ctx, &add_station()).unwrap();

    let files: Vec<PathBuf> = snapshot(ctx.root_dir()).into_keys().collect();
    assert_eq!(
        files,
        [
            "entity/StationEntity.java",
            "migrational/datastores/common/BaseStationStore.java",
            "migrational/datastores/dest/DestStationStore.java",
            "migrational/datastores/src/SrcStationStore.java",
            "repository/common/BaseStationRepository.java",
            "repository/dest/DestStationRepository.java",
            "repository/src/SrcStationRepository.java",
        ]
        .map(PathBuf::from)
    );
}

#[test]
fn two_fresh_roots_end_up_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for project in [&first, &second] {
        let ctx = context_in(project.path());
        CommandService::with_builtin_commands(Box::new(LocalFilesystem::new()))
            .unwrap()
            .dispatch(&ctx, &add_station())
            .unwrap();
    }

    assert_eq!(snapshot(first.path()), snapshot(second.path()));
}

#[test]
fn rerun_fails_and_leaves_every_file_untouched() {
    let project = TempDir::new().unwrap();
    let ctx = context_in(project.path());
    let service = CommandService::with_builtin_commands(Box::new(LocalFilesystem::new())).unwrap();

    service.dispatch(&ctx, &add_station()).unwrap();
    let entity = ctx.root_dir().join("entity/StationEntity.java");
    std::fs::write(&entity, "// edited by hand\n").unwrap();
    let before = snapshot(project.path());

    let err = service.dispatch(&ctx, &add_station()).unwrap_err();

    assert!(err.is_collision());
    assert_eq!(snapshot(project.path()), before);
}

#[test]
fn collision_midway_keeps_earlier_artifacts() {
    let project = TempDir::new().unwrap();
    let ctx = context_in(project.path());
    let blocker = ctx
        .root_dir()
        .join("repository/src/SrcStationRepository.java");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, "// existing\n").unwrap();

    let service = CommandService::with_builtin_commands(Box::new(LocalFilesystem::new())).unwrap();
    let err = service.dispatch(&ctx, &add_station()).unwrap_err();

    assert!(err.is_collision());
    let files = snapshot(ctx.root_dir());
    assert!(files.contains_key(Path::new("entity/StationEntity.java")));
    assert!(files.contains_key(Path::new("repository/common/BaseStationRepository.java")));
    assert!(!files.contains_key(Path::new("repository/dest/DestStationRepository.java")));
    assert!(!files.keys().any(|p| p.starts_with("migrational")));
    assert_eq!(files[Path::new("repository/src/SrcStationRepository.java")], "// existing\n");
}

#[test]
fn dry_run_plans_the_same_set_and_writes_nothing() {
    let project = TempDir::new().unwrap();
    let ctx = context_in(project.path());
    let writer = DryRunFilesystem::new();

    let service = CommandService::with_builtin_commands(Box::new(writer.clone())).unwrap();
    let Dispatch::Completed(report) = service.dispatch(&ctx, &add_station()).unwrap() else {
        panic!("expected a completed command");
    };

    assert_eq!(report.artifacts.len(), 7);
    assert_eq!(writer.planned().len(), 7);
    assert!(snapshot(project.path()).is_empty());
}

#[test]
fn memory_writer_matches_disk_output() {
    let project = TempDir::new().unwrap();
    let ctx = context_in(project.path());

    let memory = MemoryFilesystem::new();
    CommandService::with_builtin_commands(Box::new(memory.clone()))
        .unwrap()
        .dispatch(&ctx, &add_station())
        .unwrap();
    CommandService::with_builtin_commands(Box::new(LocalFilesystem::new()))
        .unwrap()
        .dispatch(&ctx, &add_station())
        .unwrap();

    for path in memory.list_files() {
        assert_eq!(
            memory.read_file(&path).unwrap(),
            std::fs::read_to_string(&path).unwrap()
        );
    }
}
