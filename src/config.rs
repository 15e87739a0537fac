//! Analyzer configuration, loadable from a JSON file.

use crate::error::{NrcError, Result};
use crate::persistence::LexiconSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured lexicon path.
pub const LEXICON_ENV_VAR: &str = "NRCLEX_LEXICON";

/// Configuration for building an [`EmotionAnalyzer`](crate::EmotionAnalyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Lexicon file. `None` selects the bundled lexicon.
    pub lexicon: Option<PathBuf>,
    /// Install the built-in tokenizer for raw-text analysis.
    pub builtin_tokenizer: bool,
    /// Pretty-print JSON reports.
    pub pretty: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lexicon: None,
            builtin_tokenizer: true,
            pretty: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| NrcError::Config(format!("{}: {e}", path.display())))
    }

    /// Applies `NRCLEX_LEXICON` if set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(value) = std::env::var_os(LEXICON_ENV_VAR).filter(|v| !v.is_empty()) {
            self.lexicon = Some(PathBuf::from(value));
        }
        self
    }

    pub fn lexicon_source(&self) -> LexiconSource {
        LexiconSource::from(self.lexicon.clone())
    }
}
