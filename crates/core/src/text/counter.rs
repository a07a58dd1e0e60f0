//! Word frequency counting.
//!
//! Counting folds letter case (each word is reported in its most frequent
//! casing), optionally merges simple trailing-`s` plurals into the singular,
//! and optionally promotes statistically significant adjacent pairs to
//! two-word entries using Dunning's log-likelihood ratio.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::Result;

/// Word to weight mapping. Iteration order is stable but carries no meaning.
pub type FrequencyTable = IndexMap<String, f64>;

/// Turns an ordered token sequence into a frequency table.
pub trait FrequencyCounter: Send + Sync {
    fn count(&self, tokens: &[String], normalize_plurals: bool) -> Result<FrequencyTable>;
}

/// Single-word counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnigramCounter;

impl FrequencyCounter for UnigramCounter {
    fn count(&self, tokens: &[String], normalize_plurals: bool) -> Result<FrequencyTable> {
        let processed = process_tokens(tokens, normalize_plurals);
        Ok(processed
            .counts
            .into_iter()
            .map(|(word, count)| (word, count as f64))
            .collect())
    }
}

/// Single-word counts plus two-word collocations.
#[derive(Debug, Clone, Copy)]
pub struct CollocationCounter {
    /// Minimum score for a bigram to be kept.
    pub threshold: f64,
}

impl Default for CollocationCounter {
    fn default() -> Self {
        Self { threshold: 30.0 }
    }
}

impl CollocationCounter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl FrequencyCounter for CollocationCounter {
    fn count(&self, tokens: &[String], normalize_plurals: bool) -> Result<FrequencyTable> {
        Ok(unigrams_and_bigrams(tokens, normalize_plurals, self.threshold))
    }
}

/// Output of [`process_tokens`].
#[derive(Debug, Clone, Default)]
pub struct ProcessedTokens {
    /// Count per word, keyed by the most frequent casing.
    pub counts: IndexMap<String, usize>,
    /// Lowercased word (plurals included) to the casing used in `counts`.
    pub standard_forms: FxHashMap<String, String>,
}

/// Counts `words`, folding case and optionally merging plurals.
pub fn process_tokens<S: AsRef<str>>(words: &[S], normalize_plurals: bool) -> ProcessedTokens {
    let mut cases: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();
    for word in words {
        let word = word.as_ref();
        *cases
            .entry(word.to_lowercase())
            .or_default()
            .entry(word.to_string())
            .or_insert(0) += 1;
    }

    let mut merged_plurals: Vec<(String, String)> = Vec::new();
    if normalize_plurals {
        let keys: Vec<String> = cases.keys().cloned().collect();
        for key in keys {
            if !key.ends_with('s') || key.ends_with("ss") {
                continue;
            }
            let singular = drop_last_char(&key).to_string();
            if !cases.contains_key(&singular) {
                continue;
            }
            let Some(plural_cases) = cases.shift_remove(&key) else {
                continue;
            };
            if let Some(singular_cases) = cases.get_mut(&singular) {
                for (word, count) in plural_cases {
                    *singular_cases
                        .entry(drop_last_char(&word).to_string())
                        .or_insert(0) += count;
                }
            }
            merged_plurals.push((key, singular));
        }
    }

    let mut processed = ProcessedTokens::default();
    for (lower, case_counts) in cases {
        let mut best: Option<(&String, usize)> = None;
        for (word, &count) in &case_counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((word, count));
            }
        }
        let Some((first, _)) = best else {
            continue;
        };
        let total: usize = case_counts.values().sum();
        processed.counts.insert(first.clone(), total);
        processed.standard_forms.insert(lower, first.clone());
    }

    for (plural, singular) in merged_plurals {
        if let Some(form) = processed.standard_forms.get(&singular).cloned() {
            processed.standard_forms.insert(plural, form);
        }
    }
    processed
}

/// Counts unigrams and promotes adjacent pairs scoring above `threshold`.
///
/// A promoted pair's count is subtracted from both of its words; words left
/// with a non-positive count are dropped.
pub fn unigrams_and_bigrams<S: AsRef<str>>(
    words: &[S],
    normalize_plurals: bool,
    threshold: f64,
) -> FrequencyTable {
    let n_words = words.len();
    let unigrams = process_tokens(words, normalize_plurals);
    let pairs: Vec<String> = words
        .windows(2)
        .map(|pair| format!("{} {}", pair[0].as_ref(), pair[1].as_ref()))
        .collect();
    let bigrams = process_tokens(&pairs, normalize_plurals);

    let original = &unigrams.counts;
    let mut counts: IndexMap<String, i64> = original
        .iter()
        .map(|(word, &count)| (word.clone(), count as i64))
        .collect();

    for (pair, &count) in &bigrams.counts {
        let mut parts = pair.split(' ');
        let (Some(first), Some(second)) = (parts.next(), parts.next()) else {
            continue;
        };
        let (Some(word1), Some(word2)) = (
            unigrams.standard_forms.get(&first.to_lowercase()),
            unigrams.standard_forms.get(&second.to_lowercase()),
        ) else {
            continue;
        };

        let score = collocation_score(
            count,
            original.get(word1).copied().unwrap_or(0),
            original.get(word2).copied().unwrap_or(0),
            n_words,
        );
        if score > threshold {
            // One word can take part in several collocations, so counts may
            // go negative here; they are filtered below.
            if let Some(c) = counts.get_mut(word1) {
                *c -= count as i64;
            }
            if let Some(c) = counts.get_mut(word2) {
                *c -= count as i64;
            }
            counts.insert(pair.clone(), count as i64);
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(word, count)| (word, count as f64))
        .collect()
}

/// Dunning log-likelihood collocation score of a bigram.
pub fn collocation_score(count_bigram: usize, count1: usize, count2: usize, n_words: usize) -> f64 {
    if n_words <= count1 || n_words <= count2 || count1 == 0 {
        return 0.0;
    }
    let n = n_words as f64;
    let c12 = count_bigram as f64;
    let c1 = count1 as f64;
    let c2 = count2 as f64;

    let p = c2 / n;
    let p1 = c12 / c1;
    let p2 = (c2 - c12) / (n - c1);
    let score = log_likelihood(c12, c1, p) + log_likelihood(c2 - c12, n - c1, p)
        - log_likelihood(c12, c1, p1)
        - log_likelihood(c2 - c12, n - c1, p2);
    -2.0 * score
}

fn log_likelihood(k: f64, n: f64, x: f64) -> f64 {
    x.max(1e-10).ln() * k + (1.0 - x).max(1e-10).ln() * (n - k)
}

fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn process_tokens_folds_case_to_most_common() {
        let processed = process_tokens(&["Tehran", "tehran", "Tehran"], false);
        assert_eq!(processed.counts.get("Tehran"), Some(&3));
        assert_eq!(processed.standard_forms.get("tehran").unwrap(), "Tehran");
    }

    #[test]
    fn process_tokens_tie_keeps_first_seen_case() {
        let processed = process_tokens(&["cat", "Cat"], false);
        assert_eq!(processed.counts.get("cat"), Some(&2));
        assert!(!processed.counts.contains_key("Cat"));
    }

    #[test]
    fn process_tokens_merges_plurals() {
        let processed = process_tokens(&["cat", "cats", "Cat", "dog", "glass", "glas"], true);
        assert_eq!(processed.counts.get("cat"), Some(&3));
        assert_eq!(processed.counts.get("dog"), Some(&1));
        assert_eq!(processed.counts.get("glass"), Some(&1));
        assert_eq!(processed.standard_forms.get("cats").unwrap(), "cat");
    }

    #[test]
    fn process_tokens_without_plural_merge() {
        let processed = process_tokens(&["cat", "cats"], false);
        assert_eq!(processed.counts.get("cat"), Some(&1));
        assert_eq!(processed.counts.get("cats"), Some(&1));
    }

    #[test]
    fn plural_merge_handles_multibyte_words() {
        let processed = process_tokens(&["کتاب", "کتابs"], true);
        assert_eq!(processed.counts.get("کتاب"), Some(&2));
    }

    #[test]
    fn score_is_zero_when_word_fills_document() {
        assert_eq!(collocation_score(3, 3, 1, 3), 0.0);
    }

    #[test]
    fn unigram_counter_counts() {
        let table = UnigramCounter
            .count(&tokens(&["a", "b", "a"]), true)
            .unwrap();
        assert_eq!(table.get("a"), Some(&2.0));
        assert_eq!(table.get("b"), Some(&1.0));
    }
}
