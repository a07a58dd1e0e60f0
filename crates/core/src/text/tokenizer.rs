//! Word tokenizers.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RegexTokenizer::DEFAULT_PATTERN).unwrap());
static RE_MULTI_CHAR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RegexTokenizer::MULTI_CHAR_PATTERN).unwrap());

/// Splits text into an ordered sequence of word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Tokenizer following UAX#29 word boundaries.
///
/// ZWNJ is a word-internal character under UAX#29, so Persian compounds such
/// as `می‌روم` stay whole.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.unicode_words().map(str::to_string).collect())
    }
}

/// Tokenizer returning every match of a pattern.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Word pattern used when no custom one is configured.
    pub const DEFAULT_PATTERN: &'static str = r"\w[\w']*";

    /// Word pattern requiring at least two characters.
    pub const MULTI_CHAR_PATTERN: &'static str = r"\w[\w']+";

    /// Compiles `pattern`.
    ///
    /// # Errors
    /// Returns `CloudError::InvalidPattern` if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Word tokenizer used when no custom pattern is set. Single-character
    /// tokens are never matched once `min_word_length > 1`.
    pub fn word_pattern(min_word_length: usize) -> Self {
        let pattern = if min_word_length > 1 {
            &*RE_MULTI_CHAR_WORD
        } else {
            &*RE_WORD
        };
        Self {
            pattern: pattern.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }
}

/// Drops a trailing possessive `'s` and tokens shorter than `min_len`
/// characters.
pub fn clean_tokens(tokens: Vec<String>, min_len: usize) -> Vec<String> {
    tokens
        .into_iter()
        .map(|mut token| {
            if token.ends_with("'s") || token.ends_with("'S") {
                token.truncate(token.len() - 2);
            }
            token
        })
        .filter(|token| !token.is_empty() && token.chars().count() >= min_len)
        .collect()
}
