use crate::config::AnalyzerConfig;
use crate::core::aggregator::analyze;
use crate::core::lexicon::Lexicon;
use crate::core::profile::Analysis;
use crate::error::{NrcError, Result};
use crate::persistence::{resolve_lexicon, LexiconSource};
use crate::text::tokenizer::Tokenizer;
use std::fmt;
use std::sync::Arc;

const TOKENIZER_CAPABILITY: &str = "a word tokenizer";

// The analyzer only holds shared, read-only state. Every load_* call returns a
// fresh Analysis, so one analyzer can serve any number of threads.
#[derive(Clone)]
pub struct EmotionAnalyzer {
    lexicon: Lexicon,
    tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl EmotionAnalyzer {
    /// Resolves `source` and builds an analyzer with the default tokenizer, if compiled in.
    pub fn new(source: impl Into<LexiconSource>) -> Result<Self> {
        let lexicon = resolve_lexicon(&source.into())?;
        Ok(Self::with_lexicon(lexicon))
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            tokenizer: default_tokenizer(),
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let analyzer = Self::new(config.lexicon_source())?;
        Ok(if config.builtin_tokenizer {
            analyzer
        } else {
            analyzer.without_tokenizer()
        })
    }

    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    pub fn without_tokenizer(mut self) -> Self {
        self.tokenizer = None;
        self
    }

    pub fn has_tokenizer(&self) -> bool {
        self.tokenizer.is_some()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyzes pre-tokenized input. Tokens are used as given.
    pub fn load_token_list<I, S>(&self, tokens: I) -> Analysis
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let profile = analyze(&words, &self.lexicon);
        Analysis {
            text: String::new(),
            words,
            sentences: Vec::new(),
            profile,
        }
    }

    /// Tokenizes `text` with the configured tokenizer, then analyzes the tokens.
    pub fn load_raw_text(&self, text: &str) -> Result<Analysis> {
        let tokenizer = self.tokenizer.as_ref().ok_or(NrcError::MissingTokenizer {
            capability: TOKENIZER_CAPABILITY,
        })?;

        let tokenized = tokenizer.tokenize(text);
        let profile = analyze(&tokenized.tokens, &self.lexicon);
        Ok(Analysis {
            text: text.to_string(),
            words: tokenized.tokens,
            sentences: tokenized.sentences,
            profile,
        })
    }
}

impl fmt::Debug for EmotionAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmotionAnalyzer")
            .field("lexicon_words", &self.lexicon.len())
            .field("tokenizer", &self.tokenizer.is_some())
            .finish()
    }
}

#[cfg(feature = "tokenizer")]
fn default_tokenizer() -> Option<Arc<dyn Tokenizer>> {
    Some(Arc::new(crate::text::tokenizer::SimpleTokenizer))
}

#[cfg(not(feature = "tokenizer"))]
fn default_tokenizer() -> Option<Arc<dyn Tokenizer>> {
    None
}
