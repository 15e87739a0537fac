// File: src/persistence.rs
use crate::core::lexicon::Lexicon;
use crate::core::profile::Analysis;
use crate::core::types::DEFAULT_LEXICON_FILENAME;
use crate::error::{NrcError, Result};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};
use tempfile::NamedTempFile;

/// The NRC lexicon shipped with the crate, compiled into the binary.
const BUNDLED_LEXICON_JSON: &str = include_str!("../data/nrc_en.json");

static BUNDLED_LEXICON: OnceLock<Lexicon> = OnceLock::new();
static LEXICON_CACHE: OnceLock<LexiconCache> = OnceLock::new();

/// Where a lexicon should come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexiconSource {
    /// The lexicon bundled with the crate.
    #[default]
    Bundled,
    /// A JSON lexicon file. See [`resolve_lexicon`] for the fallback rules.
    Path(PathBuf),
}

impl From<&str> for LexiconSource {
    fn from(path: &str) -> Self {
        LexiconSource::Path(PathBuf::from(path))
    }
}

impl From<&Path> for LexiconSource {
    fn from(path: &Path) -> Self {
        LexiconSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for LexiconSource {
    fn from(path: PathBuf) -> Self {
        LexiconSource::Path(path)
    }
}

impl<P: Into<PathBuf>> From<Option<P>> for LexiconSource {
    fn from(path: Option<P>) -> Self {
        path.map_or(LexiconSource::Bundled, |p| LexiconSource::Path(p.into()))
    }
}

/// Resolves a lexicon source.
///
/// - `Bundled` gives the bundled lexicon.
/// - An existing path is loaded, cached by its canonical absolute path.
/// - The default file name, or a relative path that does not exist, falls back to the bundled lexicon.
/// - An absolute path that does not exist is `LexiconNotFound`.
pub fn resolve_lexicon(source: &LexiconSource) -> Result<Lexicon> {
    let path = match source {
        LexiconSource::Bundled => return load_bundled_lexicon(),
        LexiconSource::Path(path) => path,
    };

    if path.exists() {
        let resolved = fs::canonicalize(path)?;
        return LexiconCache::global().get_or_load(&resolved);
    }

    if path.as_os_str() == DEFAULT_LEXICON_FILENAME {
        return load_bundled_lexicon();
    }
    if !path.is_absolute() {
        warn!(
            "lexicon '{}' not found relative to the working directory, using the bundled lexicon",
            path.display()
        );
        return load_bundled_lexicon();
    }

    Err(NrcError::LexiconNotFound { path: path.clone() })
}

/// Parses the bundled lexicon once per process.
pub fn load_bundled_lexicon() -> Result<Lexicon> {
    if let Some(lexicon) = BUNDLED_LEXICON.get() {
        return Ok(lexicon.clone());
    }
    let parsed = Lexicon::from_json_str(BUNDLED_LEXICON_JSON).map_err(|source| {
        NrcError::MalformedLexicon {
            path: PathBuf::from(DEFAULT_LEXICON_FILENAME),
            source,
        }
    })?;
    info!("loaded bundled lexicon ({} words)", parsed.len());
    Ok(BUNDLED_LEXICON.get_or_init(|| parsed).clone())
}

/// Reads a JSON lexicon file without touching the cache.
pub fn load_lexicon_from_path(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lexicon = Lexicon::from_reader(reader).map_err(|source| NrcError::MalformedLexicon {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded lexicon '{}' ({} words)", path.display(), lexicon.len());
    Ok(lexicon)
}

/// Process-wide cache of file lexicons keyed by canonical path.
///
/// Each key is populated at most once: concurrent loaders of the same path may
/// both read the file, but only the first insert is kept and every caller gets
/// that shared instance back.
#[derive(Debug, Default)]
pub struct LexiconCache {
    entries: RwLock<HashMap<PathBuf, Lexicon>>,
}

impl LexiconCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static LexiconCache {
        LEXICON_CACHE.get_or_init(LexiconCache::new)
    }

    /// Returns the cached lexicon for `path`, loading it on first use.
    /// `path` should already be canonical.
    pub fn get_or_load(&self, path: &Path) -> Result<Lexicon> {
        if let Some(lexicon) = self.get(path) {
            debug!("lexicon cache hit: {}", path.display());
            return Ok(lexicon);
        }

        debug!("lexicon cache miss: {}", path.display());
        let loaded = load_lexicon_from_path(path)?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(path.to_path_buf()).or_insert(loaded).clone())
    }

    pub fn get(&self, path: &Path) -> Option<Lexicon> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached lexicon. Handles already given out stay valid.
    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Writes `lexicon` as a JSON lexicon file, atomically.
pub fn save_lexicon(lexicon: &Lexicon, path: &Path) -> Result<()> {
    write_json_atomic(lexicon, path, false)
}

/// Writes an analysis report as JSON, atomically.
pub fn save_analysis(analysis: &Analysis, path: &Path, pretty: bool) -> Result<()> {
    write_json_atomic(analysis, path, pretty)
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| NrcError::Io(e.error))?;
    debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_lexicon(path: &Path) {
        fs::write(
            path,
            r#"{"happy": ["positive", "joy"], "sad": ["negative", "sadness"], "wow": ["surprise", "anticipation"]}"#,
        )
        .unwrap();
    }

    #[test]
    fn bundled_lexicon_contains_known_word() {
        let lex = load_bundled_lexicon().unwrap();
        assert!(lex.contains("abandon"));
        assert!(lex.shares_storage_with(&load_bundled_lexicon().unwrap()));
    }

    #[test]
    fn default_and_relative_missing_fall_back_to_bundled() {
        for source in [
            LexiconSource::Bundled,
            LexiconSource::from(DEFAULT_LEXICON_FILENAME),
            LexiconSource::from("does_not_exist.json"),
            LexiconSource::from(None::<PathBuf>),
        ] {
            let lex = resolve_lexicon(&source).unwrap();
            assert!(lex.contains("abandon"), "{source:?}");
        }
    }

    #[test]
    fn absolute_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("definitely_missing_lexicon.json");
        let err = resolve_lexicon(&LexiconSource::from(missing.clone())).unwrap_err();
        assert!(matches!(err, NrcError::LexiconNotFound { ref path } if *path == missing));
    }

    #[test]
    fn existing_path_is_loaded_and_cached() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        write_lexicon(&path);

        let first = resolve_lexicon(&LexiconSource::from(path.clone())).unwrap();
        let second = resolve_lexicon(&LexiconSource::from(path.clone())).unwrap();
        assert_eq!(first.len(), 3);
        assert!(!first.contains("abandon"));
        assert!(first.shares_storage_with(&second));

        let canonical = fs::canonicalize(&path).unwrap();
        assert!(LexiconCache::global().get(&canonical).is_some());
    }

    #[test]
    fn local_cache_populates_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        write_lexicon(&path);

        let cache = LexiconCache::new();
        assert!(cache.is_empty());
        let first = cache.get_or_load(&path).unwrap();
        // A rewrite of the file is not observed until the cache is cleared.
        fs::write(&path, r#"{"calm": ["trust"]}"#).unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(first.shares_storage_with(&second));
        assert_eq!(cache.len(), 1);

        cache.clear();
        let reloaded = cache.get_or_load(&path).unwrap();
        assert!(reloaded.contains("calm"));
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = resolve_lexicon(&LexiconSource::from(path)).unwrap_err();
        assert!(matches!(err, NrcError::MalformedLexicon { .. }));
    }

    #[test]
    fn saved_lexicon_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        let lex: Lexicon = vec![("happy", vec!["positive", "joy"])].into_iter().collect();

        save_lexicon(&lex, &path).unwrap();
        assert_eq!(load_lexicon_from_path(&path).unwrap(), lex);
    }
}
