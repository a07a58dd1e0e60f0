//! Stopword sets.
//!
//! The bundled list is compiled into the binary and parsed into a new set
//! for every builder, so additions on one builder never leak into another.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::Result;

/// Bundled stopword list, one word per line.
pub const DEFAULT_STOPWORDS: &str = include_str!("../assets/stopwords.txt");

/// A set of stopwords compared case-insensitively at filtering time.
///
/// Words are stored exactly as added; case folding happens in
/// [`StopwordSet::folded`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding every non-empty trimmed line of the bundled list.
    pub fn bundled() -> Self {
        let words = DEFAULT_STOPWORDS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// Creates a set from raw words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.add_words(words);
        set
    }

    /// Adds raw words without any case transformation.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    /// Adds every trimmed line of a file.
    ///
    /// Lines are split the way a line reader would: a file ending in a blank
    /// line contributes an empty-string stopword.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn add_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.add_words(parse_lines(&content));
        Ok(())
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Lowercased copy of the set, used for case-insensitive filtering.
    pub fn folded(&self) -> FxHashSet<String> {
        self.words.iter().map(|w| w.to_lowercase()).collect()
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the stored words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn parse_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n').map(str::trim)
}
