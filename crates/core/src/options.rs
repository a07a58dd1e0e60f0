//! Word cloud options.
//!
//! Contains `CloudOptions`, the configuration a `TextCloudBuilder` is built
//! from. Text-processing toggles and canvas parameters live side by side; the
//! canvas values are only forwarded to the layout engine.

use std::path::PathBuf;

/// Options controlling text preparation and the forwarded layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudOptions {
    /// Font file handed to the layout engine. `None` falls back to the
    /// `FONT_PATH` environment variable, then to the bundled font.
    pub font_path: Option<PathBuf>,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Gap between words in pixels.
    pub margin: u32,

    /// Maximum number of words the layout engine keeps.
    pub max_words: usize,

    /// Smallest font size the layout engine may use.
    pub min_font_size: f32,

    /// Largest font size. `None` lets the engine use the canvas height.
    pub max_font_size: Option<f32>,

    /// Step between tried font sizes.
    pub font_step: f32,

    /// Ratio of horizontal to vertical placements.
    pub prefer_horizontal: f32,

    /// Scale between computation and drawing.
    pub scale: f32,

    /// Influence of word weight on font size (0.0 to 1.0). `None` means auto:
    /// 0.5, or 0.0 when `repeat` is set.
    pub relative_scaling: Option<f32>,

    /// Background color passed through to the renderer.
    pub background_color: String,

    /// Seed for engines that randomize placement.
    pub random_state: Option<u64>,

    /// Repeat words until `max_words` is reached.
    pub repeat: bool,

    /// Initial stopwords. `None` loads the bundled list.
    pub stopwords: Option<Vec<String>>,

    /// Keep ASCII, Arabic-Indic and Persian digits in the text.
    pub include_numbers: bool,

    /// Run the Persian normalizer over text and words.
    pub persian_normalize: bool,

    /// Skip reshaping and bidi reordering of words.
    pub no_reshape: bool,

    /// Remove emoji, pictographs and bidi control characters before shaping.
    pub remove_unhandled_utf_characters: bool,

    /// Custom tokenizer pattern. Every match is one token.
    pub regexp: Option<String>,

    /// Tokenize with the `\w[\w']*` pattern instead of UAX#29 word
    /// boundaries when no `regexp` is set.
    pub regex_tokenizer: bool,

    /// Detect two-word collocations while counting.
    pub collocations: bool,

    /// Merge trailing-`s` plurals into their singular.
    pub normalize_plurals: bool,

    /// Minimum log-likelihood score for a bigram to count as a collocation.
    pub collocation_threshold: f64,

    /// Tokens shorter than this many characters are dropped.
    pub min_word_length: usize,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            font_path: None,
            width: 400,
            height: 200,
            margin: 2,
            max_words: 200,
            min_font_size: 4.0,
            max_font_size: None,
            font_step: 1.0,
            prefer_horizontal: 0.9,
            scale: 1.0,
            relative_scaling: None,
            background_color: "black".to_string(),
            random_state: None,
            repeat: false,
            stopwords: None,
            include_numbers: true,
            persian_normalize: false,
            no_reshape: false,
            remove_unhandled_utf_characters: true,
            regexp: None,
            regex_tokenizer: false,
            collocations: true,
            normalize_plurals: true,
            collocation_threshold: 30.0,
            min_word_length: 0,
        }
    }
}

impl CloudOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font path.
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Sets the canvas size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the maximum number of words.
    pub fn max_words(mut self, max: usize) -> Self {
        self.max_words = max;
        self
    }

    /// Sets the font size ceiling.
    pub fn max_font_size(mut self, size: f32) -> Self {
        self.max_font_size = Some(size);
        self
    }

    /// Sets the background color.
    pub fn background_color(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    /// Replaces the bundled stopword list with `words`.
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Keeps or strips digits.
    pub fn include_numbers(mut self, enabled: bool) -> Self {
        self.include_numbers = enabled;
        self
    }

    /// Enables or disables Persian normalization.
    pub fn persian_normalize(mut self, enabled: bool) -> Self {
        self.persian_normalize = enabled;
        self
    }

    /// Disables reshaping when `true`.
    pub fn no_reshape(mut self, disabled: bool) -> Self {
        self.no_reshape = disabled;
        self
    }

    /// Enables or disables stripping of unhandled characters.
    pub fn remove_unhandled_utf_characters(mut self, enabled: bool) -> Self {
        self.remove_unhandled_utf_characters = enabled;
        self
    }

    /// Sets a custom tokenizer pattern.
    pub fn regexp(mut self, pattern: &str) -> Self {
        self.regexp = Some(pattern.to_string());
        self
    }

    /// Switches the default tokenizer to the word pattern.
    pub fn regex_tokenizer(mut self, enabled: bool) -> Self {
        self.regex_tokenizer = enabled;
        self
    }

    /// Enables or disables collocation detection.
    pub fn collocations(mut self, enabled: bool) -> Self {
        self.collocations = enabled;
        self
    }

    /// Enables or disables plural merging.
    pub fn normalize_plurals(mut self, enabled: bool) -> Self {
        self.normalize_plurals = enabled;
        self
    }

    /// Sets the minimum token length.
    pub fn min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Effective relative scaling after resolving the auto value.
    pub fn effective_relative_scaling(&self) -> f32 {
        match self.relative_scaling {
            Some(value) => value.clamp(0.0, 1.0),
            None if self.repeat => 0.0,
            None => 0.5,
        }
    }
}
