// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod text;

pub use crate::config::AnalyzerConfig;
pub use crate::core::aggregator::analyze;
pub use crate::core::engine::EmotionAnalyzer;
pub use crate::core::lexicon::Lexicon;
pub use crate::core::profile::{AffectProfile, Analysis, EmotionFrequencies};
pub use crate::core::types::{Emotion, DEFAULT_LEXICON_FILENAME, EMOTION_ORDER};
pub use crate::error::{NrcError, Result};
pub use crate::persistence::{resolve_lexicon, LexiconSource};
pub use crate::text::tokenizer::{Tokenized, Tokenizer};
#[cfg(feature = "tokenizer")]
pub use crate::text::tokenizer::SimpleTokenizer;
