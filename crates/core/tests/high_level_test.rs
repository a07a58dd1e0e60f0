//! Tests for the one-call helpers and the ranked layout output.

use std::io::Write;

use wordcloud_fa_core::api::{generate_layout, generate_layout_from_file, word_frequencies};
use wordcloud_fa_core::{CloudError, CloudOptions};

const MIXED: &str = "باران باران باران آفتاب آفتاب rain rain the و 😀";

#[test]
fn test_word_frequencies_removes_bundled_stopwords() {
    let table = word_frequencies(MIXED, None).unwrap();
    assert!(!table.contains_key("the"));
    assert!(!table.contains_key("و"));
    assert_eq!(table.get("rain"), Some(&2.0));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_word_frequencies_without_reshape_keeps_logical_order() {
    let options = CloudOptions::new().no_reshape(true);
    let table = word_frequencies(MIXED, Some(options)).unwrap();
    assert_eq!(table.get("باران"), Some(&3.0));
    assert_eq!(table.get("آفتاب"), Some(&2.0));
}

#[test]
fn test_generate_layout_ranks_words() {
    let layout = generate_layout(MIXED, Some(CloudOptions::new().no_reshape(true))).unwrap();
    let words: Vec<&str> = layout.words().iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words[0], "باران");
    assert_eq!(layout.words()[0].weight, 1.0);
    assert_eq!(layout.words()[0].font_size, 200.0);
}

#[test]
fn test_layout_json_mentions_font_and_canvas() {
    let options = CloudOptions::new().font_path("/fonts/Sahel.ttf").size(800, 400);
    let layout = generate_layout("کتاب کتاب", Some(options)).unwrap();
    let json = layout.to_json().unwrap();
    assert!(json.contains("/fonts/Sahel.ttf"));
    assert!(json.contains("\"width\": 800"));
}

#[test]
fn test_generate_layout_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("سلام سلام دنیا".as_bytes()).unwrap();
    file.flush().unwrap();

    let layout = generate_layout_from_file(file.path(), None).unwrap();
    assert_eq!(layout.words().len(), 2);
}

#[test]
fn test_generate_layout_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate_layout_from_file(dir.path().join("nope.txt"), None).unwrap_err();
    assert!(matches!(err, CloudError::Io(_)));
}
