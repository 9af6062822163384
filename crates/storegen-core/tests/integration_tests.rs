//! End-to-end tests of the core through its public API, with an in-test
//! writer standing in for the filesystem.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use storegen_core::{
    application::ApplicationError,
    prelude::*,
};

/// Clones share state, so the test keeps a handle after boxing one.
#[derive(Clone, Default)]
struct RecordingWriter {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    order: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingWriter {
    fn seeded(path: &Path, content: &str) -> Self {
        let writer = Self::default();
        writer
            .files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        writer
    }

    fn content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl ArtifactWriter for RecordingWriter {
    fn create_new(&self, path: &Path, content: &str) -> StoregenResult<()> {
        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) {
            return Err(ApplicationError::Collision {
                path: path.to_path_buf(),
            }
            .into());
        }
        files.insert(path.to_path_buf(), content.to_string());
        self.order.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn is_dir(&self, _path: &Path) -> bool {
        true
    }
}

fn service(writer: &RecordingWriter) -> CommandService {
    CommandService::with_builtin_commands(Box::new(writer.clone())).unwrap()
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

const ROOT: &str = "/project/src/main/java/com/example/mongo_migrate_multids";

fn context() -> Context {
    Context::new("com.example.mongo_migrate_multids", ROOT).unwrap()
}

#[test]
fn entity_add_writes_the_full_family() {
    let writer = RecordingWriter::default();
    let service = service(&writer);

    service
        .dispatch(&context(), &tokens(&["entity", "add", "stations", "Station", "String"]))
        .unwrap();

    let written: Vec<String> = writer
        .order
        .lock()
        .unwrap()
        .iter()
        .map(|p| p.strip_prefix(ROOT).unwrap().display().to_string())
        .collect();
    assert_eq!(
        written,
        [
            "entity/StationEntity.java",
            "repository/common/BaseStationRepository.java",
            "repository/src/SrcStationRepository.java",
            "repository/dest/DestStationRepository.java",
            "migrational/datastores/common/BaseStationStore.java",
            "migrational/datastores/src/SrcStationStore.java",
            "migrational/datastores/dest/DestStationStore.java",
        ]
    );

    let entity = writer
        .content(&Path::new(ROOT).join("entity/StationEntity.java"))
        .unwrap();
    assert!(entity.starts_with("package com.example.mongo_migrate_multids.entity;\n"));
    assert!(entity.contains("@Document(value = \"stations\")"));

    let src_store = writer
        .content(&Path::new(ROOT).join("migrational/datastores/src/SrcStationStore.java"))
        .unwrap();
    assert!(src_store.contains("public class SrcStationStore"));
    assert!(src_store.contains("extends BaseStationStore"));
    assert!(src_store.contains("SrcStationRepository"));
}

#[test]
fn generated_files_reference_each_other_consistently() {
    let writer = RecordingWriter::default();
    let service = service(&writer);
    service
        .dispatch(&context(), &tokens(&["entity", "add", "trips", "Trip", "Long"]))
        .unwrap();

    let files = writer.files.lock().unwrap();
    let names = [
        "TripEntity",
        "BaseTripRepository",
        "SrcTripRepository",
        "DestTripRepository",
        "BaseTripStore",
        "SrcTripStore",
        "DestTripStore",
    ];

    // Every name that appears anywhere is declared by exactly one file.
    for name in names {
        let declaring = files
            .values()
            .filter(|c| {
                c.lines().any(|l| {
                    l.starts_with("public ") && l.split_whitespace().any(|w| w == name)
                })
            })
            .count();
        assert_eq!(declaring, 1, "{name} should be declared once");
    }

    for (path, content) in files.iter() {
        assert!(content.ends_with('\n'), "{} lacks trailing newline", path.display());
        assert!(
            !content.lines().any(|l| !l.is_empty() && l.trim().is_empty()),
            "{} has whitespace-only lines",
            path.display()
        );
    }
}

#[test]
fn rerun_stops_at_first_existing_file() {
    let entity_path = Path::new(ROOT).join("entity/StationEntity.java");
    let writer = RecordingWriter::seeded(&entity_path, "// hand edited\n");
    let service = service(&writer);

    let err = service
        .dispatch(&context(), &tokens(&["entity", "add", "stations", "Station", "String"]))
        .unwrap_err();

    assert!(err.is_collision());
    assert_eq!(err.category(), ErrorCategory::Conflict);
    assert_eq!(writer.content(&entity_path).unwrap(), "// hand edited\n");
    assert!(writer.order.lock().unwrap().is_empty());
}

#[test]
fn same_input_renders_identical_bytes() {
    let first = RecordingWriter::default();
    let second = RecordingWriter::default();
    let args = tokens(&["entity", "add", "stations", "Station", "String"]);

    for writer in [&first, &second] {
        service(writer).dispatch(&context(), &args).unwrap();
    }

    assert_eq!(*first.files.lock().unwrap(), *second.files.lock().unwrap());
}

#[test]
fn unknown_command_lists_alternatives() {
    let writer = RecordingWriter::default();
    let service = service(&writer);

    let err = service
        .dispatch(&context(), &tokens(&["entity", "drop"]))
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.suggestions().iter().any(|s| s.contains("entity add")));
}
