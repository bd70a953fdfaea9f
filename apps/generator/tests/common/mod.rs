//! Common test utilities for generator integration tests.
//!
//! Every test gets its own scratch directory so runs never touch `data/`.

use std::fs;
use std::path::Path;

use finals_generator::Config;
use serde_json::Value;
use tempfile::TempDir;

/// Scratch directory plus a config pointing into it.
///
/// The output directory is a child of the temp dir and does not exist yet.
pub struct TestContext {
    pub dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = dir.path().join("data");
        let config = Config::from_vars(Some(output_dir.display().to_string()), None);
        Self { dir, config }
    }
}

/// Read and parse a generated JSON file.
pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&text).expect("Output is not valid JSON")
}

/// Parse a generated file and return its top-level array.
pub fn read_array(path: &Path) -> Vec<Value> {
    match read_json(path) {
        Value::Array(items) => items,
        other => panic!("expected a JSON array, got {}", other),
    }
}

/// Find a record by its `id` field.
pub fn find_by_id<'a>(records: &'a [Value], id: &str) -> &'a Value {
    records
        .iter()
        .find(|r| r["id"] == id)
        .unwrap_or_else(|| panic!("no record with id {}", id))
}
