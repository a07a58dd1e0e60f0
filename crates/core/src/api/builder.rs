//! The word cloud builder.
//!
//! `TextCloudBuilder` owns the options, the active stopword set and the
//! text-processing collaborators, and delegates layout to a
//! [`LayoutEngine`].
//!
//! # Example
//! ```ignore
//! use wordcloud_fa_core::api::TextCloudBuilder;
//! use wordcloud_fa_core::CloudOptions;
//!
//! let mut builder = TextCloudBuilder::new(
//!     CloudOptions::new().persian_normalize(true).include_numbers(false),
//! )?;
//! builder.add_stop_words(["the", "and"]);
//! let layout = builder.generate("متن فارسی and English text")?;
//! println!("{}", layout.to_json()?);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::Result;
use crate::font::resolve_font_path;
use crate::layout::{LayoutEngine, LayoutRequest, RankedLayoutEngine};
use crate::options::CloudOptions;
use crate::stopwords::StopwordSet;
use crate::text::tokenizer::clean_tokens;
use crate::text::{
    ArabicReshaper, CollocationCounter, FrequencyCounter, FrequencyTable, Normalizer,
    PersianNormalizer, RegexTokenizer, Reshaper, Tokenizer, UnicodeWordTokenizer, UnigramCounter,
    batch, numerals, unhandled,
};

/// Prepares Persian, Arabic and Latin text for a word cloud.
pub struct TextCloudBuilder<E = RankedLayoutEngine> {
    options: CloudOptions,
    stopwords: StopwordSet,
    font_path: PathBuf,
    normalizer: Box<dyn Normalizer>,
    tokenizer: Box<dyn Tokenizer>,
    reshaper: Box<dyn Reshaper>,
    counter: Box<dyn FrequencyCounter>,
    engine: E,
}

impl TextCloudBuilder<RankedLayoutEngine> {
    /// Creates a builder with the default collaborators and the ranking
    /// layout engine.
    ///
    /// # Errors
    /// Returns `CloudError::InvalidPattern` if `options.regexp` does not
    /// compile.
    pub fn new(options: CloudOptions) -> Result<Self> {
        Self::with_engine(options, RankedLayoutEngine)
    }

    /// Reshapes `words` for display with the default reshaper.
    ///
    /// One output word per input word. Words containing `\n` are rejected.
    pub fn reshape_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>> {
        batch::reshape_words(words, &ArabicReshaper::default())
    }

    /// Normalizes `words` with the default Persian normalizer.
    pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>> {
        batch::normalize_words(words, &PersianNormalizer::default())
    }
}

impl<E: LayoutEngine> TextCloudBuilder<E> {
    /// Creates a builder that delegates layout to `engine`.
    ///
    /// With `options.stopwords` unset, the bundled stopword list is loaded
    /// into a set owned by this builder.
    pub fn with_engine(options: CloudOptions, engine: E) -> Result<Self> {
        let tokenizer: Box<dyn Tokenizer> = match options.regexp.as_deref() {
            Some(pattern) => Box::new(RegexTokenizer::new(pattern)?),
            None if options.regex_tokenizer => {
                Box::new(RegexTokenizer::word_pattern(options.min_word_length))
            }
            None => Box::new(UnicodeWordTokenizer::new()),
        };
        let counter: Box<dyn FrequencyCounter> = if options.collocations {
            Box::new(CollocationCounter::new(options.collocation_threshold))
        } else {
            Box::new(UnigramCounter)
        };
        let stopwords = match options.stopwords.as_ref() {
            Some(words) => StopwordSet::from_words(words.iter().cloned()),
            None => StopwordSet::bundled(),
        };
        let font_path = resolve_font_path(options.font_path.as_deref());
        debug!(
            stopwords = stopwords.len(),
            font = %font_path.display(),
            "builder created"
        );

        Ok(Self {
            options,
            stopwords,
            font_path,
            normalizer: Box::new(PersianNormalizer::default()),
            tokenizer,
            reshaper: Box::new(ArabicReshaper::default()),
            counter,
            engine,
        })
    }

    /// Replaces the normalizer.
    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    /// Replaces the tokenizer, including one built from `options.regexp`.
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Replaces the reshaper.
    pub fn with_reshaper(mut self, reshaper: impl Reshaper + 'static) -> Self {
        self.reshaper = Box::new(reshaper);
        self
    }

    /// Replaces the frequency counter. `options.collocations` no longer
    /// selects the counter once this is set.
    pub fn with_counter(mut self, counter: impl FrequencyCounter + 'static) -> Self {
        self.counter = Box::new(counter);
        self
    }

    pub fn options(&self) -> &CloudOptions {
        &self.options
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Resolved font path handed to the layout engine.
    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Adds raw words to the active stopword set.
    pub fn add_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.add_words(words);
    }

    /// Adds every trimmed line of `path` to the active stopword set.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn add_stop_words_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.stopwords.add_from_file(path)
    }

    /// Runs the character-level stages: unhandled-character stripping,
    /// normalization and numeral stripping, each if enabled.
    pub fn preprocess_text(&self, text: &str) -> Result<String> {
        let mut text = if self.options.remove_unhandled_utf_characters {
            unhandled::strip_unhandled(text)
        } else {
            text.to_string()
        };
        if self.options.persian_normalize {
            text = self.normalizer.normalize(&text)?;
        }
        if !self.options.include_numbers {
            text = numerals::strip_numerals(&text);
        }
        Ok(text)
    }

    /// Turns raw text into a frequency table.
    ///
    /// Stopwords are kept; they are removed by
    /// [`generate_from_frequencies`](Self::generate_from_frequencies).
    #[instrument(skip_all, fields(input_len = text.len()))]
    pub fn process_text(&self, text: &str) -> Result<FrequencyTable> {
        let cleaned = self.preprocess_text(text)?;
        let tokens = self.tokenizer.tokenize(&cleaned)?;
        let tokens = clean_tokens(tokens, self.options.min_word_length);
        debug!(tokens = tokens.len(), "tokenized");

        let table = self.counter.count(&tokens, self.options.normalize_plurals)?;
        debug!(words = table.len(), "counted");
        Ok(table)
    }

    /// Reshapes `words` with this builder's reshaper.
    pub fn reshape(&self, words: &[String]) -> Result<Vec<String>> {
        batch::reshape_words(words, self.reshaper.as_ref())
    }

    /// Normalizes `words` with this builder's normalizer.
    pub fn normalize(&self, words: &[String]) -> Result<Vec<String>> {
        batch::normalize_words(words, self.normalizer.as_ref())
    }

    /// Copy of `frequencies` without stopwords, compared case-insensitively.
    pub fn filter_stopwords(&self, frequencies: &FrequencyTable) -> FrequencyTable {
        let folded = self.stopwords.folded();
        frequencies
            .iter()
            .filter(|(word, _)| !folded.contains(&word.to_lowercase()))
            .map(|(word, &weight)| (word.clone(), weight))
            .collect()
    }

    /// Filters stopwords, normalizes and reshapes the remaining words, and
    /// reattaches each word's weight by position.
    ///
    /// Words that end up identical after the transforms have their weights
    /// summed.
    pub fn prepare_frequencies(&self, frequencies: &FrequencyTable) -> Result<FrequencyTable> {
        let kept = self.filter_stopwords(frequencies);
        debug!(
            before = frequencies.len(),
            after = kept.len(),
            "stopwords filtered"
        );
        let (mut words, weights): (Vec<String>, Vec<f64>) = kept.into_iter().unzip();

        if self.options.persian_normalize {
            words = self.normalize(&words)?;
        }
        if !self.options.no_reshape {
            words = self.reshape(&words)?;
        }

        let mut prepared = FrequencyTable::with_capacity(words.len());
        for (word, weight) in words.into_iter().zip(weights) {
            *prepared.entry(word).or_insert(0.0) += weight;
        }
        Ok(prepared)
    }

    /// Prepares `frequencies` and hands them to the layout engine.
    ///
    /// `max_font_size` overrides `options.max_font_size` for this call. The
    /// caller's table is not modified.
    ///
    /// Only whole entries are matched against stopwords, so collocations made
    /// of stopwords (`"to the"`) survive unless the phrase itself is added
    /// with [`add_stop_words`](Self::add_stop_words).
    #[instrument(skip_all, fields(words = frequencies.len()))]
    pub fn generate_from_frequencies(
        &self,
        frequencies: &FrequencyTable,
        max_font_size: Option<f32>,
    ) -> Result<E::Output> {
        let prepared = self.prepare_frequencies(frequencies)?;
        let request = LayoutRequest {
            frequencies: &prepared,
            max_font_size,
            font_path: &self.font_path,
            options: &self.options,
        };
        self.engine.generate_from_frequencies(&request)
    }

    /// Same as [`process_text`](Self::process_text) followed by
    /// [`generate_from_frequencies`](Self::generate_from_frequencies).
    pub fn generate(&self, text: &str) -> Result<E::Output> {
        self.generate_from_text(text)
    }

    /// Generates from raw text.
    pub fn generate_from_text(&self, text: &str) -> Result<E::Output> {
        let frequencies = self.process_text(text)?;
        self.generate_from_frequencies(&frequencies, None)
    }

    /// HTML export is not supported; always `None`.
    pub fn to_html(&self) -> Option<String> {
        None
    }
}

impl<E: fmt::Debug> fmt::Debug for TextCloudBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCloudBuilder")
            .field("options", &self.options)
            .field("stopwords", &self.stopwords.len())
            .field("font_path", &self.font_path)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
