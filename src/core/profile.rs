// src/core/profile.rs
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Deref;

/// Normalized label frequencies, kept in reporting order: the ten canonical
/// emotions first, then any extra lexicon labels in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmotionFrequencies {
    entries: Vec<(String, f64)>,
}

impl EmotionFrequencies {
    pub(crate) fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.iter().find(|(l, _)| l == label).map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all frequencies: 1.0 (within rounding) when anything matched, else 0.0.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn max_value(&self) -> Option<f64> {
        self.entries.iter().map(|&(_, v)| v).reduce(f64::max)
    }
}

impl Serialize for EmotionFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// The affect aggregation result for one token sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AffectProfile {
    pub(crate) affect_list: Vec<String>,
    pub(crate) affect_dict: BTreeMap<String, Vec<String>>,
    pub(crate) raw_emotion_scores: BTreeMap<String, usize>,
    pub(crate) affect_frequencies: EmotionFrequencies,
    pub(crate) top_emotions: Vec<(String, f64)>,
}

impl AffectProfile {
    /// Every triggered label, one per (token, label) match, in token order.
    pub fn affect_list(&self) -> &[String] {
        &self.affect_list
    }

    /// Matched token -> its lexicon labels.
    pub fn affect_dict(&self) -> &BTreeMap<String, Vec<String>> {
        &self.affect_dict
    }

    /// Label counts. Only labels that actually occurred are present.
    pub fn raw_emotion_scores(&self) -> &BTreeMap<String, usize> {
        &self.raw_emotion_scores
    }

    pub fn affect_frequencies(&self) -> &EmotionFrequencies {
        &self.affect_frequencies
    }

    /// All (label, frequency) pairs tied for the maximum frequency.
    pub fn top_emotions(&self) -> &[(String, f64)] {
        &self.top_emotions
    }

    pub fn top_emotion_labels(&self) -> Vec<&str> {
        self.top_emotions.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn total_matches(&self) -> usize {
        self.affect_list.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.affect_list.is_empty()
    }
}

/// A profile together with the input it was computed from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Analysis {
    /// Raw input text; empty on the token-list path.
    pub text: String,
    pub words: Vec<String>,
    /// Sentence segmentation from the tokenizer; empty on the token-list path.
    pub sentences: Vec<String>,
    #[serde(flatten)]
    pub profile: AffectProfile,
}

impl Deref for Analysis {
    type Target = AffectProfile;

    fn deref(&self) -> &AffectProfile {
        &self.profile
    }
}
