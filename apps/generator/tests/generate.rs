//! End-to-end generation tests.
//!
//! Each test writes into a fresh temp directory and inspects the JSON files.

mod common;

use std::collections::HashSet;
use std::fs;

use pretty_assertions::assert_eq;
use serde_json::json;

use common::{find_by_id, read_array, TestContext};
use finals_generator::generate;

/// Test both files are created in a missing output directory.
#[test]
fn test_generate_creates_directory_and_files() {
    let ctx = TestContext::new();
    assert!(!ctx.config.output_dir.exists());

    let summary = generate(&ctx.config).unwrap();

    assert!(summary.paths.verbs.is_file());
    assert!(summary.paths.sentences.is_file());
    assert_eq!(summary.verbs, 82);
    assert_eq!(summary.corrected, 3);
    assert_eq!(summary.reorder, 68);
    assert_eq!(summary.choice, 0);
}

/// Test the summary reports the configured directory, not the default.
#[test]
fn test_summary_reports_resolved_output_dir() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    assert_eq!(summary.paths.dir, ctx.config.output_dir);
    assert!(summary.paths.dir.starts_with(ctx.dir.path()));
}

/// Test the documented verb example.
#[test]
fn test_verb_example_record() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    let verbs = read_array(&summary.paths.verbs);
    assert_eq!(verbs.len(), 82);
    assert_eq!(
        find_by_id(&verbs, "verb_finals_cut"),
        &json!({
            "id": "verb_finals_cut",
            "type": "verb",
            "base": "cut",
            "past": "cut",
            "pastParticiple": "cut",
            "meaning": "切る",
            "category": "finals_range",
            "difficulty": "medium"
        })
    );
}

/// Test the corrected verbs in the written file.
#[test]
fn test_corrected_verbs_written() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();
    let verbs = read_array(&summary.paths.verbs);

    for (base, past, participle) in [("become", "became", "become"), ("come", "came", "come"), ("run", "ran", "run")] {
        let verb = find_by_id(&verbs, &format!("verb_finals_{}", base));
        assert_eq!(verb["past"], past);
        assert_eq!(verb["pastParticiple"], participle);
    }
}

/// Test the documented sentence example.
#[test]
fn test_sentence_example_record() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    let sentences = read_array(&summary.paths.sentences);
    assert_eq!(sentences.len(), 68);
    assert_eq!(
        sentences[0],
        json!({
            "id": "reorder_finals_001",
            "type": "reorder",
            "prompt": "私はいそがしかったです。",
            "template": "I __0__ busy yesterday.",
            "blanks": ["was"],
            "category": "finals_range",
            "difficulty": "medium"
        })
    );
}

/// Test every placeholder in a written template has a matching blank.
#[test]
fn test_placeholders_pair_with_blanks() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    for sentence in read_array(&summary.paths.sentences) {
        let template = sentence["template"].as_str().unwrap();
        let blanks = sentence["blanks"].as_array().unwrap();
        assert!(!blanks.is_empty());
        for k in 0..blanks.len() {
            assert_eq!(template.matches(&format!("__{}__", k)).count(), 1, "{}", template);
        }
        assert!(!template.contains(&format!("__{}__", blanks.len())));
    }
}

/// Test ids are unique across both files.
#[test]
fn test_ids_unique() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    let mut records = read_array(&summary.paths.verbs);
    records.extend(read_array(&summary.paths.sentences));

    let ids: HashSet<_> = records.iter().map(|r| r["id"].as_str().unwrap().to_string()).collect();
    assert_eq!(ids.len(), records.len());
}

/// Test Japanese text is written literally, not escaped.
#[test]
fn test_non_ascii_written_literally() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    let text = fs::read_to_string(&summary.paths.sentences).unwrap();
    assert!(text.contains("私はいそがしかったです。"));
    assert!(!text.contains("\\u"));
    assert!(text.starts_with("[\n  {\n"));
}

/// Test every record writes `id` first and `type` second.
#[test]
fn test_records_start_with_id_then_type() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();

    let verbs = fs::read_to_string(&summary.paths.verbs).unwrap();
    assert!(verbs.starts_with("[\n  {\n    \"id\": \"verb_finals_cut\",\n    \"type\": \"verb\","));

    let sentences = fs::read_to_string(&summary.paths.sentences).unwrap();
    assert!(sentences.starts_with("[\n  {\n    \"id\": \"reorder_finals_001\",\n    \"type\": \"reorder\","));
}

/// Test existing files are overwritten.
#[test]
fn test_overwrites_existing_files() {
    let ctx = TestContext::new();
    let paths = ctx.config.output_paths();
    fs::create_dir_all(&paths.dir).unwrap();
    fs::write(&paths.verbs, "stale").unwrap();

    generate(&ctx.config).unwrap();

    assert_eq!(read_array(&paths.verbs).len(), 82);
}

/// Test a second run produces identical output.
#[test]
fn test_generation_is_deterministic() {
    let ctx = TestContext::new();
    let summary = generate(&ctx.config).unwrap();
    let first = fs::read(&summary.paths.sentences).unwrap();

    generate(&ctx.config).unwrap();
    assert_eq!(fs::read(&summary.paths.sentences).unwrap(), first);
}

/// Test an output path occupied by a file fails before writing anything.
#[test]
fn test_output_dir_is_a_file() {
    let ctx = TestContext::new();
    fs::write(&ctx.config.output_dir, "not a directory").unwrap();

    let err = generate(&ctx.config).unwrap_err();

    assert!(err.to_string().starts_with("writing quiz data to"));
    let cause = err.root_cause().to_string();
    assert!(!cause.is_empty());
    assert!(ctx.config.output_dir.is_file());
}
