//! JSON output for the quiz application's static data files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{Result, WriteError};
use crate::types::{SentenceRecord, VerbRecord};

pub const VERBS_FILE_NAME: &str = "questions_finals_verbs.json";
pub const SENTENCES_FILE_NAME: &str = "questions_finals_sentences.json";

/// Locations of the two generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub verbs: PathBuf,
    pub sentences: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            verbs: dir.join(VERBS_FILE_NAME),
            sentences: dir.join(SENTENCES_FILE_NAME),
            dir,
        }
    }
}

/// Write both record collections as pretty-printed JSON arrays.
///
/// Both documents are serialized before anything touches the disk. Existing
/// files are overwritten in place.
pub fn write_outputs(
    paths: &OutputPaths,
    verbs: &[VerbRecord],
    sentences: &[SentenceRecord],
) -> Result<()> {
    let verbs_json = to_json(verbs, &paths.verbs)?;
    let sentences_json = to_json(sentences, &paths.sentences)?;

    fs::create_dir_all(&paths.dir).map_err(|source| WriteError::CreateDir {
        path: paths.dir.clone(),
        source,
    })?;

    write_file(&paths.verbs, &verbs_json)?;
    info!(path = %paths.verbs.display(), records = verbs.len(), "wrote verb questions");

    write_file(&paths.sentences, &sentences_json)?;
    info!(path = %paths.sentences.display(), records = sentences.len(), "wrote sentence questions");

    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| WriteError::Serialize {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
