//! Generator configuration read from the environment.

use std::path::PathBuf;

use finals_core::OutputPaths;

/// Overrides the output directory.
pub const OUTPUT_DIR_VAR: &str = "FINALS_OUTPUT_DIR";
/// Log filter directive.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build from environment variables.
    ///
    /// Optional env vars:
    /// - FINALS_OUTPUT_DIR: Output directory (default "data")
    /// - RUST_LOG: Log filter (default "info")
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(OUTPUT_DIR_VAR).ok(),
            std::env::var(LOG_FILTER_VAR).ok(),
        )
    }

    /// Build from already-read values. Empty strings count as unset.
    pub fn from_vars(output_dir: Option<String>, log_filter: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            output_dir: non_empty(output_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            log_filter: non_empty(log_filter).unwrap_or(defaults.log_filter),
        }
    }

    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(&self.output_dir)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_data_dir() {
        let config = Config::from_vars(None, None);
        assert_eq!(config, Config::default());
        assert_eq!(
            config.output_paths().verbs,
            PathBuf::from("data/questions_finals_verbs.json")
        );
    }

    #[test]
    fn output_dir_override() {
        let config = Config::from_vars(Some("build/quiz".to_string()), None);
        assert_eq!(config.output_dir, PathBuf::from("build/quiz"));
        assert_eq!(
            config.output_paths().sentences,
            PathBuf::from("build/quiz/questions_finals_sentences.json")
        );
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = Config::from_vars(Some("  ".to_string()), Some(String::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn log_filter_override() {
        let config = Config::from_vars(None, Some("finals_core=debug".to_string()));
        assert_eq!(config.log_filter, "finals_core=debug");
    }
}
