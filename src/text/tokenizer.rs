//! Tokenizer abstraction for the raw-text entry point. You can plug in your own implementation.

/// Output of a tokenizer: lookup-ready tokens plus a sentence segmentation.
/// Sentences are kept for inspection only; aggregation uses `tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    pub sentences: Vec<String>,
}

/// Trait for tokenization.
pub trait Tokenizer: Send + Sync {
    /// Tokenize raw text. Tokens must come out in the lexicon's key casing.
    fn tokenize(&self, text: &str) -> Tokenized;
}

/// Lower-casing word tokenizer with naive sentence splitting.
///
/// Words are maximal runs of alphanumerics and apostrophes, with leading and
/// trailing apostrophes stripped. Sentences end at `.`, `!` or `?`. No
/// lemmatization is done.
#[cfg(feature = "tokenizer")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

#[cfg(feature = "tokenizer")]
impl SimpleTokenizer {
    fn words(text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|w| w.trim_matches('\''))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    fn sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for (idx, c) in text.char_indices() {
            if matches!(c, '.' | '!' | '?') {
                let end = idx + c.len_utf8();
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }
        }
        push_sentence(&mut sentences, &text[start..]);
        sentences
    }
}

#[cfg(feature = "tokenizer")]
fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    // Runs like "?!" or "..." attach to nothing.
    if trimmed.chars().any(char::is_alphanumeric) {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(feature = "tokenizer")]
impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Tokenized {
        Tokenized {
            tokens: Self::words(text),
            sentences: Self::sentences(text),
        }
    }
}
