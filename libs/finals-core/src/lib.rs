//! Core library for the finals quiz data generator.
//!
//! Provides:
//! - Verb conjugation table parser with a declarative correction table
//! - Sentence template extractor for `*span*` marked example sentences
//! - JSON output writer for the quiz application's static data files
//! - Shared record types (VerbRecord, SentenceRecord, SentenceTemplate, etc.)

pub mod error;
pub mod sentences;
pub mod source;
pub mod types;
pub mod verbs;
pub mod writer;

pub use error::{Result, WriteError};
pub use sentences::{extract_spans, parse_sentences};
pub use source::{SENTENCES_MARKED, VERBS_RAW};
pub use types::{
    Blank, Category, ChoiceQuestion, Difficulty, QuestionKind, ReorderQuestion, SentenceRecord,
    SentenceTemplate, VerbRecord, CHOICE_FALLBACK,
};
pub use verbs::{apply_corrections, parse_verb_rows, parse_verbs, VerbCorrection, VERB_CORRECTIONS};
pub use writer::{write_outputs, OutputPaths, SENTENCES_FILE_NAME, VERBS_FILE_NAME};
