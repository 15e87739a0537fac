// src/core/types.rs
use crate::error::NrcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File name of the lexicon bundled with the crate.
pub const DEFAULT_LEXICON_FILENAME: &str = "nrc_en.json";

/// The emotion vocabulary as plain labels, in canonical order.
pub const EMOTION_ORDER: [&str; 10] = [
    "fear",
    "anger",
    "anticipation",
    "trust",
    "surprise",
    "positive",
    "negative",
    "sadness",
    "disgust",
    "joy",
];

/// One of the ten canonical NRC emotion categories.
/// Declaration order is the canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Fear,
    Anger,
    Anticipation,
    Trust,
    Surprise,
    Positive,
    Negative,
    Sadness,
    Disgust,
    Joy,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Trust,
        Emotion::Surprise,
        Emotion::Positive,
        Emotion::Negative,
        Emotion::Sadness,
        Emotion::Disgust,
        Emotion::Joy,
    ];

    pub fn as_str(self) -> &'static str {
        EMOTION_ORDER[self as usize]
    }

    /// Looks up a vocabulary label. Matching is exact; lexicon labels are lowercase.
    pub fn from_label(label: &str) -> Option<Self> {
        EMOTION_ORDER
            .iter()
            .position(|&l| l == label)
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = NrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| NrcError::UnknownEmotion(s.to_string()))
    }
}
