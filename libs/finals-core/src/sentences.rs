//! Sentence template extractor.
//!
//! # Format
//! ```text
//! I *was* busy yesterday.|私はいそがしかったです。
//! We *were not*[weren't] *running*.|私たちは走っていませんでした。
//! ```
//!
//! Each `*span*` becomes a numbered blank in the template. A sentence with no
//! spans falls back to a two-option choice record.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::types::{ChoiceQuestion, ReorderQuestion, SentenceRecord, SentenceTemplate};

/// Non-greedy so `*a* b *c*` yields two spans.
static SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());

const SEPARATOR: char = '|';

/// Parse a sentence block into records, one per line that has a separator.
///
/// Non-empty lines are numbered from 1; a line without a separator still
/// takes its number, so ids can have gaps.
pub fn parse_sentences(content: &str) -> Vec<SentenceRecord> {
    let mut records = Vec::new();

    let lines = content.lines().filter(|line| !line.trim().is_empty());
    for (idx, line) in lines.enumerate() {
        let number = idx + 1;
        match parse_line(line) {
            LineType::Sentence { english, prompt } => {
                records.push(build_record(number, english, prompt));
            }
            LineType::Unseparated => {
                debug!(number, line, "skipping sentence line without separator");
            }
        }
    }

    records
}

enum LineType<'a> {
    Sentence { english: &'a str, prompt: &'a str },
    Unseparated,
}

fn parse_line(line: &str) -> LineType<'_> {
    match line.split_once(SEPARATOR) {
        Some((english, prompt)) => LineType::Sentence {
            english: english.trim(),
            prompt: prompt.trim(),
        },
        None => LineType::Unseparated,
    }
}

fn build_record(number: usize, english: &str, prompt: &str) -> SentenceRecord {
    let template = extract_spans(english);

    if template.is_empty() {
        warn!(number, english, "sentence has no marked spans, emitting choice fallback");
        return SentenceRecord::Choice(ChoiceQuestion::new(number, english, prompt));
    }

    SentenceRecord::Reorder(ReorderQuestion::new(number, prompt, template))
}

/// Replace each `*span*` in `english` with a placeholder, left to right.
///
/// Text outside the spans is kept unchanged, including an unmatched
/// trailing asterisk.
pub fn extract_spans(english: &str) -> SentenceTemplate {
    let mut template = SentenceTemplate::new();
    let mut last_end = 0;

    for caps in SPAN_REGEX.captures_iter(english) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        template.push_literal(&english[last_end..whole.start()]);
        template.push_blank(inner.as_str());
        last_end = whole.end();
    }

    template.push_literal(&english[last_end..]);
    template
}
