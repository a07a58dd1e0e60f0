//! Tests for TextCloudBuilder: text cleaning, stopword filtering, reshaping
//! and delegation to the layout engine.

use std::cell::RefCell;

use wordcloud_fa_core::stopwords::DEFAULT_STOPWORDS;
use wordcloud_fa_core::text::{Normalizer, Reshaper};
use wordcloud_fa_core::{
    CloudError, CloudOptions, FrequencyTable, LayoutEngine, LayoutRequest, Result,
    TextCloudBuilder,
};

fn table(entries: &[(&str, f64)]) -> FrequencyTable {
    entries.iter().map(|&(w, f)| (w.to_string(), f)).collect()
}

/// Engine that records what it was given.
#[derive(Default)]
struct RecordingEngine {
    calls: RefCell<Vec<(FrequencyTable, Option<f32>)>>,
}

impl LayoutEngine for RecordingEngine {
    type Output = usize;

    fn generate_from_frequencies(&self, request: &LayoutRequest<'_>) -> Result<usize> {
        self.calls
            .borrow_mut()
            .push((request.frequencies.clone(), request.max_font_size));
        Ok(request.frequencies.len())
    }
}

fn recording(options: CloudOptions) -> TextCloudBuilder<RecordingEngine> {
    TextCloudBuilder::with_engine(options, RecordingEngine::default()).unwrap()
}

// ============================================================================
// Stopword filtering
// ============================================================================

#[test]
fn test_stopword_filter_is_case_insensitive() {
    let builder = recording(CloudOptions::new().stopwords(["the"]).no_reshape(true));
    let freqs = table(&[("The", 5.0), ("cat", 3.0)]);

    builder.generate_from_frequencies(&freqs, None).unwrap();

    let calls = builder.engine().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, table(&[("cat", 3.0)]));
}

#[test]
fn test_uppercase_stopword_matches_lowercase_word() {
    let builder = recording(CloudOptions::new().stopwords(["AND"]).no_reshape(true));
    let prepared = builder
        .prepare_frequencies(&table(&[("and", 1.0), ("android", 2.0)]))
        .unwrap();
    assert_eq!(prepared, table(&[("android", 2.0)]));
}

#[test]
fn test_caller_table_is_not_mutated() {
    let builder = recording(CloudOptions::new().stopwords(["the"]));
    let freqs = table(&[("the", 5.0), ("سلام", 3.0)]);
    let before = freqs.clone();
    builder.generate_from_frequencies(&freqs, Some(30.0)).unwrap();
    assert_eq!(freqs, before);
    assert_eq!(builder.engine().calls.borrow()[0].1, Some(30.0));
}

#[test]
fn test_added_stopwords_apply_to_generation() {
    let mut builder = recording(CloudOptions::new().no_reshape(true));
    builder.add_stop_words(["Custom"]);
    let prepared = builder
        .prepare_frequencies(&table(&[("custom", 4.0), ("kept", 1.0)]))
        .unwrap();
    assert_eq!(prepared, table(&[("kept", 1.0)]));
}

// ============================================================================
// Reshaping position correspondence
// ============================================================================

#[test]
fn test_reshape_keeps_length() {
    let words = ["سلام", "دنیا", "word", "", "کتاب\u{200C}ها"];
    let reshaped = TextCloudBuilder::reshape_words(&words).unwrap();
    assert_eq!(reshaped.len(), words.len());
    assert_eq!(reshaped[2], "word");
    assert_eq!(reshaped[3], "");
}

#[test]
fn test_reshape_weights_follow_words() {
    let builder = recording(CloudOptions::new().stopwords(Vec::<String>::new()));
    let words = ["سلام", "دنیا", "hello", "کتاب"];
    let freqs: FrequencyTable = words
        .iter()
        .enumerate()
        .map(|(i, w)| (w.to_string(), (i + 1) as f64))
        .collect();

    let prepared = builder.prepare_frequencies(&freqs).unwrap();
    let reshaped = TextCloudBuilder::reshape_words(&words).unwrap();
    assert_eq!(prepared.len(), words.len());
    for (i, word) in reshaped.iter().enumerate() {
        assert_eq!(prepared.get(word), Some(&((i + 1) as f64)), "word {i}");
    }
}

#[test]
fn test_normalized_words_are_reshaped() {
    let builder = recording(
        CloudOptions::new()
            .persian_normalize(true)
            .stopwords(Vec::<String>::new()),
    );
    let prepared = builder
        .prepare_frequencies(&table(&[("سلام", 3.0), ("كتاب", 2.0)]))
        .unwrap();
    assert_eq!(
        prepared,
        table(&[
            ("\u{FEE1}\u{FEFC}\u{FEB3}", 3.0),
            ("\u{FE8F}\u{FE8E}\u{FE98}\u{FB90}", 2.0),
        ])
    );
}

#[test]
fn test_reshape_mirrors_brackets() {
    let reshaped = TextCloudBuilder::reshape_words(&["(سلام)"]).unwrap();
    assert_eq!(reshaped, vec!["(\u{FEE1}\u{FEFC}\u{FEB3})"]);
}

#[test]
fn test_reshape_rejects_sentinel() {
    let err = TextCloudBuilder::reshape_words(&["ok", "bad\nword"]).unwrap_err();
    assert!(matches!(err, CloudError::SentinelCollision { index: 1, .. }));
}

#[test]
fn test_reshape_of_nothing_is_nothing() {
    let words: [&str; 0] = [];
    assert!(TextCloudBuilder::reshape_words(&words).unwrap().is_empty());
}

// ============================================================================
// Text cleaning
// ============================================================================

#[test]
fn test_numerals_stripped_when_disabled() {
    let text = "abc 123 ٤٥٦ ۷۸۹ ۰ def";
    let builder = recording(CloudOptions::new().include_numbers(false));
    let cleaned = builder.preprocess_text(text).unwrap();
    assert!(!cleaned.chars().any(|c| c.is_ascii_digit()
        || ('\u{0660}'..='\u{0669}').contains(&c)
        || ('\u{06F0}'..='\u{06F9}').contains(&c)));
    assert!(cleaned.contains("abc"));
    assert!(cleaned.contains("def"));
}

#[test]
fn test_numerals_kept_when_enabled() {
    let text = "abc 123 ٤٥٦ ۷۸۹";
    let builder = recording(CloudOptions::new().include_numbers(true));
    assert_eq!(builder.preprocess_text(text).unwrap(), text);
}

#[test]
fn test_emoji_stripping_toggle() {
    let text = "شاد \u{1F600} happy";
    let stripping = recording(CloudOptions::new());
    assert!(!stripping.preprocess_text(text).unwrap().contains('\u{1F600}'));

    let keeping = recording(CloudOptions::new().remove_unhandled_utf_characters(false));
    assert!(keeping.preprocess_text(text).unwrap().contains('\u{1F600}'));
}

#[test]
fn test_stopwords_survive_process_text() {
    let builder = recording(
        CloudOptions::new()
            .stopwords(["the", "and"])
            .no_reshape(true),
    );
    let freqs = builder.process_text("the and the").unwrap();
    assert_eq!(freqs.get("the"), Some(&2.0));
    assert_eq!(freqs.get("and"), Some(&1.0));

    assert_eq!(builder.generate_from_frequencies(&freqs, None).unwrap(), 0);
}

#[test]
fn test_regex_tokenizer_option() {
    let options = CloudOptions::new()
        .collocations(false)
        .no_reshape(true)
        .stopwords(Vec::<String>::new());

    let unicode = recording(options.clone());
    assert_eq!(unicode.process_text("3.14").unwrap(), table(&[("3.14", 1.0)]));

    let regex = recording(options.clone().regex_tokenizer(true));
    assert_eq!(
        regex.process_text("3.14").unwrap(),
        table(&[("3", 1.0), ("14", 1.0)])
    );

    let regex_multi = recording(options.regex_tokenizer(true).min_word_length(2));
    assert_eq!(
        regex_multi.process_text("a bb 3.14").unwrap(),
        table(&[("bb", 1.0), ("14", 1.0)])
    );
}

#[test]
fn test_stopword_phrases_need_phrase_stopwords() {
    let text = "and the ".repeat(40);
    let mut builder = recording(
        CloudOptions::new()
            .stopwords(["and", "the"])
            .no_reshape(true),
    );
    let counts = builder.process_text(&text).unwrap();
    let prepared = builder.prepare_frequencies(&counts).unwrap();
    assert!(prepared.contains_key("and the"));

    builder.add_stop_words(["and the", "the and"]);
    assert!(builder.prepare_frequencies(&counts).unwrap().is_empty());
}

#[test]
fn test_normalization_runs_before_counting() {
    let builder = recording(
        CloudOptions::new()
            .persian_normalize(true)
            .collocations(false)
            .no_reshape(true)
            .stopwords(Vec::<String>::new()),
    );
    let freqs = builder.process_text("علمي علمی").unwrap();
    assert_eq!(freqs, table(&[("علمی", 2.0)]));
}

#[test]
fn test_normalized_digits_are_stripped() {
    let builder = recording(
        CloudOptions::new()
            .persian_normalize(true)
            .include_numbers(false)
            .collocations(false),
    );
    let freqs = builder.process_text("سال 1402").unwrap();
    assert_eq!(freqs, table(&[("سال", 1.0)]));
}

// ============================================================================
// Determinism and whole-text generation
// ============================================================================

#[test]
fn test_identical_builders_agree() {
    let text = "Tehran is big. Tehran tehran city city. سلام دنیا سلام";
    let first = recording(CloudOptions::new().persian_normalize(true));
    let second = recording(CloudOptions::new().persian_normalize(true));

    let a = first.process_text(text).unwrap();
    let b = second.process_text(text).unwrap();
    assert_eq!(
        a.iter().collect::<Vec<_>>(),
        b.iter().collect::<Vec<_>>()
    );

    first.generate(text).unwrap();
    second.generate(text).unwrap();
    assert_eq!(
        first.engine().calls.borrow()[0].0,
        second.engine().calls.borrow()[0].0
    );
}

#[test]
fn test_generate_equals_process_then_frequencies() {
    let text = "باران باران آفتاب rain";
    let builder = recording(CloudOptions::new());
    builder.generate(text).unwrap();
    let counts = builder.process_text(text).unwrap();
    builder.generate_from_frequencies(&counts, None).unwrap();

    let calls = builder.engine().calls.borrow();
    assert_eq!(calls[0], calls[1]);
}

// ============================================================================
// Bundled stopwords
// ============================================================================

#[test]
fn test_default_stopwords_loaded() {
    let builder = recording(CloudOptions::new());
    let expected: Vec<&str> = DEFAULT_STOPWORDS
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!expected.is_empty());
    for word in expected {
        assert!(builder.stopwords().contains(word), "missing {word}");
    }
}

#[test]
fn test_stopword_additions_do_not_leak() {
    let mut first = recording(CloudOptions::new());
    let second = recording(CloudOptions::new());
    first.add_stop_words(["leak-check"]);
    assert!(first.stopwords().contains("leak-check"));
    assert!(!second.stopwords().contains("leak-check"));
}

// ============================================================================
// Collaborator errors
// ============================================================================

struct FailingNormalizer;

impl Normalizer for FailingNormalizer {
    fn normalize(&self, _text: &str) -> Result<String> {
        Err(CloudError::Collaborator("normalizer unavailable".to_string()))
    }
}

struct LineDroppingReshaper;

impl Reshaper for LineDroppingReshaper {
    fn reshape(&self, text: &str) -> Result<String> {
        Ok(text.replace('\n', " "))
    }
}

#[test]
fn test_collaborator_error_propagates() {
    let builder = recording(CloudOptions::new().persian_normalize(true))
        .with_normalizer(FailingNormalizer);
    let err = builder.process_text("متن").unwrap_err();
    assert!(matches!(err, CloudError::Collaborator(_)));
}

#[test]
fn test_misaligned_reshaper_is_reported() {
    let builder = recording(CloudOptions::new().stopwords(Vec::<String>::new()))
        .with_reshaper(LineDroppingReshaper);
    let err = builder
        .prepare_frequencies(&table(&[("a", 1.0), ("b", 2.0)]))
        .unwrap_err();
    assert!(matches!(
        err,
        CloudError::Misaligned {
            expected: 2,
            got: 1
        }
    ));
}
