pub mod config;

use anyhow::Context;
use finals_core::{
    apply_corrections, parse_sentences, parse_verb_rows, write_outputs, OutputPaths,
    SentenceRecord, SENTENCES_MARKED, VERBS_RAW, VERB_CORRECTIONS,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::Config;

/// Counts from one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub verbs: usize,
    pub corrected: usize,
    pub reorder: usize,
    pub choice: usize,
    pub paths: OutputPaths,
}

pub fn run() -> anyhow::Result<()> {
    let dotenv_path = dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = dotenv_path {
        tracing::info!(path = %path.display(), "Loaded environment file");
    }

    let summary = generate(&config)?;

    tracing::info!(
        verbs = summary.verbs,
        sentences = summary.reorder + summary.choice,
        dir = %summary.paths.dir.display(),
        "Files generated successfully"
    );

    Ok(())
}

/// Parse both embedded blocks and write the two data files.
pub fn generate(config: &Config) -> anyhow::Result<Summary> {
    let mut verbs = parse_verb_rows(VERBS_RAW);
    let corrected = apply_corrections(&mut verbs, VERB_CORRECTIONS);
    tracing::info!(count = verbs.len(), corrected, "Parsed verb table");

    let sentences = parse_sentences(SENTENCES_MARKED);
    let choice = sentences
        .iter()
        .filter(|s| matches!(s, SentenceRecord::Choice(_)))
        .count();
    let reorder = sentences.len() - choice;
    tracing::info!(count = sentences.len(), reorder, choice, "Parsed sentences");

    let paths = config.output_paths();
    tracing::info!(dir = %paths.dir.display(), "Writing quiz data");
    write_outputs(&paths, &verbs, &sentences)
        .with_context(|| format!("writing quiz data to {}", paths.dir.display()))?;

    Ok(Summary {
        verbs: verbs.len(),
        corrected,
        reorder,
        choice,
        paths,
    })
}
