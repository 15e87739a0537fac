// src/core/aggregator.rs
use crate::core::lexicon::Lexicon;
use crate::core::profile::{AffectProfile, EmotionFrequencies};
use crate::core::types::EMOTION_ORDER;
use std::collections::BTreeMap;

/// Computes the affect profile of `tokens` against `lexicon`.
///
/// Tokens are looked up verbatim, so they must already be in the lexicon's
/// key casing. Repeated tokens count once per occurrence. Empty input and
/// input with no matches are ordinary cases: every frequency is 0.0 and all
/// vocabulary labels tie in `top_emotions`.
pub fn analyze<I, S>(tokens: I, lexicon: &Lexicon) -> AffectProfile
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut affect_list = Vec::new();
    let mut affect_dict = BTreeMap::new();

    // 1-3. Matched tokens contribute their labels in lexicon order.
    for token in tokens {
        let token = token.as_ref();
        if let Some(labels) = lexicon.get(token) {
            affect_list.extend(labels.iter().cloned());
            affect_dict.insert(token.to_string(), labels.to_vec());
        }
    }

    // 4-5. Raw counts; only labels that occurred get a key.
    let mut raw_emotion_scores: BTreeMap<String, usize> = BTreeMap::new();
    let mut extra_labels: Vec<&str> = Vec::new();
    for label in &affect_list {
        let count = raw_emotion_scores.entry(label.clone()).or_insert(0);
        if *count == 0 && !EMOTION_ORDER.contains(&label.as_str()) {
            extra_labels.push(label.as_str());
        }
        *count += 1;
    }
    let total: usize = raw_emotion_scores.values().sum();

    // 6. Vocabulary labels are always reported; labels outside it follow in first-seen order.
    let frequency = |label: &str| match raw_emotion_scores.get(label) {
        Some(&count) if total > 0 => count as f64 / total as f64,
        _ => 0.0,
    };
    let entries: Vec<(String, f64)> = EMOTION_ORDER
        .iter()
        .copied()
        .chain(extra_labels.iter().copied())
        .map(|label| (label.to_string(), frequency(label)))
        .collect();
    let affect_frequencies = EmotionFrequencies::new(entries);

    // 7. Every label tied at the maximum, in table order.
    let top_emotions: Vec<(String, f64)> = match affect_frequencies.max_value() {
        Some(max_value) => affect_frequencies
            .iter()
            .filter(|&(_, value)| value == max_value)
            .map(|(label, value)| (label.to_string(), value))
            .collect(),
        None => Vec::new(),
    };

    AffectProfile {
        affect_list,
        affect_dict,
        raw_emotion_scores,
        affect_frequencies,
        top_emotions,
    }
}
