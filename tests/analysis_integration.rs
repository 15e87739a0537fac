use nrclex::{EmotionAnalyzer, LexiconSource, NrcError, EMOTION_ORDER};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_lexicon(path: &Path) -> PathBuf {
    let lexicon = r#"{
        "happy": ["positive", "joy"],
        "sad": ["negative", "sadness"],
        "wow": ["surprise", "anticipation"]
    }"#;
    fs::write(path, lexicon).expect("failed to write lexicon");
    path.to_path_buf()
}

#[test]
fn repeated_tokens_scale_counts() {
    let dir = tempdir().unwrap();
    let path = write_lexicon(&dir.path().join("lexicon.json"));
    let analyzer = EmotionAnalyzer::new(path).unwrap();

    let analysis = analyzer.load_token_list(["happy", "happy", "sad"]);

    let expected: BTreeMap<String, usize> = [("positive", 2), ("joy", 2), ("negative", 1), ("sadness", 1)]
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    assert_eq!(analysis.raw_emotion_scores(), &expected);
    let freqs = analysis.affect_frequencies();
    assert!((freqs.get("positive").unwrap() - 2.0 / 6.0).abs() < 1e-12);
    assert!((freqs.get("sadness").unwrap() - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn no_matches_stable_zero_frequencies() {
    let dir = tempdir().unwrap();
    let path = write_lexicon(&dir.path().join("lexicon.json"));
    let analyzer = EmotionAnalyzer::new(path).unwrap();

    let analysis = analyzer.load_token_list(["unknown", "tokens"]);

    assert!(analysis.raw_emotion_scores().is_empty());
    assert!(analysis.affect_frequencies().iter().all(|(_, v)| v == 0.0));
    assert_eq!(analysis.top_emotions().len(), 10);
}

#[test]
fn empty_token_list_stable_behavior() {
    let dir = tempdir().unwrap();
    let path = write_lexicon(&dir.path().join("lexicon.json"));
    let analyzer = EmotionAnalyzer::new(path).unwrap();

    let analysis = analyzer.load_token_list(Vec::<String>::new());

    assert!(analysis.affect_list().is_empty());
    assert!(analysis.affect_dict().is_empty());
    assert!(analysis.raw_emotion_scores().is_empty());
    let labels: Vec<&str> = analysis.affect_frequencies().labels().collect();
    assert_eq!(labels, EMOTION_ORDER);
    assert!(analysis.affect_frequencies().iter().all(|(_, v)| v == 0.0));
}

#[test]
fn default_constructor_loads_bundled_lexicon() {
    let analyzer = EmotionAnalyzer::new(LexiconSource::Bundled).unwrap();
    assert!(analyzer.lexicon().contains("abandon"));
}

#[test]
fn relative_missing_lexicon_falls_back_to_bundled() {
    let analyzer = EmotionAnalyzer::new("does_not_exist.json").unwrap();
    assert!(analyzer.lexicon().contains("abandon"));
}

#[test]
fn missing_absolute_custom_path_raises() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("definitely_missing_nrclex_lexicon.json");
    let err = EmotionAnalyzer::new(missing).unwrap_err();
    assert!(matches!(err, NrcError::LexiconNotFound { .. }));
    assert!(err.to_string().contains("definitely_missing_nrclex_lexicon.json"));
}

#[test]
fn bundled_lexicon_scores_raw_text() {
    let analyzer = EmotionAnalyzer::new(LexiconSource::Bundled).unwrap();
    let analysis = match analyzer.load_raw_text("I am happy but also sad.") {
        Ok(analysis) => analysis,
        // Built without the default tokenizer.
        Err(NrcError::MissingTokenizer { .. }) => return,
        Err(e) => panic!("unexpected error: {e}"),
    };

    assert!(analysis.affect_frequencies().get("positive").is_some());
    assert!(analysis.words.contains(&"happy".to_string()));
    assert!((analysis.affect_frequencies().total() - 1.0).abs() < 1e-9);
    let max = analysis.affect_frequencies().max_value().unwrap();
    for (label, value) in analysis.top_emotions() {
        assert_eq!(*value, max, "{label}");
    }
}

#[test]
fn saved_report_is_json_with_every_field() {
    let dir = tempdir().unwrap();
    let path = write_lexicon(&dir.path().join("lexicon.json"));
    let analyzer = EmotionAnalyzer::new(path).unwrap();
    let analysis = analyzer.load_token_list(["wow", "sad"]);

    let report = dir.path().join("reports").join("wow.json");
    nrclex::persistence::save_analysis(&analysis, &report, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["text"], "");
    assert_eq!(value["words"], serde_json::json!(["wow", "sad"]));
    assert_eq!(value["affect_frequencies"]["surprise"], 0.25);
    assert_eq!(value["affect_frequencies"].as_object().unwrap().len(), 10);
    assert_eq!(value["top_emotions"].as_array().unwrap().len(), 4);
}
