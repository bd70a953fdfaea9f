//! Verb conjugation table parser.
//!
//! # Format
//! ```text
//! cut,cut,cut,cutting,切る
//! forget,forgot,forgot/forgotten,forgetting,忘れる
//! ```
//!
//! Fields are `base,past,pastParticiple,gerund,meaning`. The gerund is read
//! but not kept. Rows with fewer than five fields are skipped.

use tracing::debug;

use crate::types::VerbRecord;

/// Replacement forms for a verb whose source row is known to be wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbCorrection {
    pub base: &'static str,
    pub past: &'static str,
    pub past_participle: &'static str,
}

/// Corrections applied after parsing, keyed by exact base form.
pub const VERB_CORRECTIONS: &[VerbCorrection] = &[
    VerbCorrection {
        base: "become",
        past: "became",
        past_participle: "become",
    },
    VerbCorrection {
        base: "come",
        past: "came",
        past_participle: "come",
    },
    VerbCorrection {
        base: "run",
        past: "ran",
        past_participle: "run",
    },
];

/// Parse a verb table and apply [`VERB_CORRECTIONS`].
pub fn parse_verbs(content: &str) -> Vec<VerbRecord> {
    let mut verbs = parse_verb_rows(content);
    apply_corrections(&mut verbs, VERB_CORRECTIONS);
    verbs
}

/// Parse a verb table without corrections, one record per well-formed row.
pub fn parse_verb_rows(content: &str) -> Vec<VerbRecord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let record = parse_row(line);
            if record.is_none() && !line.trim().is_empty() {
                debug!(line = idx + 1, row = line, "skipping malformed verb row");
            }
            record
        })
        .collect()
}

fn parse_row(line: &str) -> Option<VerbRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [base, past, past_participle, _gerund, meaning, ..] => {
            Some(VerbRecord::new(base, past, past_participle, meaning))
        }
        _ => None,
    }
}

/// Overwrite past and participle forms of every record whose base form
/// appears in `corrections`. Returns how many records matched.
pub fn apply_corrections(verbs: &mut [VerbRecord], corrections: &[VerbCorrection]) -> usize {
    let mut corrected = 0;

    for verb in verbs.iter_mut() {
        let Some(fix) = corrections.iter().find(|c| c.base == verb.base) else {
            continue;
        };
        if verb.past != fix.past || verb.past_participle != fix.past_participle {
            debug!(
                base = fix.base,
                from_past = %verb.past,
                from_participle = %verb.past_participle,
                "correcting verb forms"
            );
        }
        verb.past = fix.past.to_string();
        verb.past_participle = fix.past_participle.to_string();
        corrected += 1;
    }

    corrected
}
