// src/core/lexicon.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::sync::Arc;

/// A read-only word -> emotion labels mapping.
///
/// Storage is shared behind an `Arc`, so clones are cheap and every analysis
/// holding a clone sees the same immutable data. There is no way to mutate a
/// `Lexicon` after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: Arc<HashMap<String, Vec<String>>>,
}

impl Lexicon {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Labels for `word`, in lexicon order. Lookup is case-sensitive.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(w, l)| (w.as_str(), l.as_slice()))
    }

    /// True when both handles point at the same loaded data.
    pub fn shares_storage_with(&self, other: &Lexicon) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl From<HashMap<String, Vec<String>>> for Lexicon {
    fn from(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries: Arc::new(entries) }
    }
}

impl<W, L> FromIterator<(W, Vec<L>)> for Lexicon
where
    W: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, Vec<L>)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(word, labels)| (word.into(), labels.into_iter().map(Into::into).collect()))
            .collect::<HashMap<String, Vec<String>>>()
            .into()
    }
}

// Written with sorted keys so saved files diff cleanly.
impl Serialize for Lexicon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&String, &Vec<String>> = self.entries.iter().collect();
        sorted.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Lexicon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HashMap::<String, Vec<String>>::deserialize(deserializer).map(Lexicon::from)
    }
}
