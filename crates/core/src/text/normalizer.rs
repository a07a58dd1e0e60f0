//! Persian text normalization.
//!
//! Canonicalizes variant letter forms so that the same word written with
//! Arabic or Persian code points, with or without diacritics, counts as one
//! word. The normalizer never adds or removes line breaks: the batch word
//! operations rely on `\n` surviving untouched.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

use super::numerals::to_persian_digit;

/// Canonicalizes a string. Implementations must keep every `\n` in place.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Result<String>;
}

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{00A0}]+").unwrap());
static RE_EDGE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+|[ \t]+$").unwrap());
static RE_VERB_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[ ])(ن?می) ").unwrap());
static RE_PLURAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)([^ \n]) (هایی|های|ها)([ ]|$)").unwrap());

/// Rules-based Persian normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersianNormalizer {
    /// Map Arabic kaf and yeh variants to their Persian forms.
    pub character_refinement: bool,
    /// Drop short-vowel marks and tatweel.
    pub remove_diacritics: bool,
    /// Rewrite ASCII and Arabic-Indic digits as Persian digits.
    pub persian_numbers: bool,
    /// Join `می`/`نمی` prefixes and `ها` suffixes with ZWNJ.
    pub affix_spacing: bool,
}

impl Default for PersianNormalizer {
    fn default() -> Self {
        Self {
            character_refinement: true,
            remove_diacritics: true,
            persian_numbers: true,
            affix_spacing: true,
        }
    }
}

impl PersianNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn refine_char(&self, c: char, out: &mut String) {
        match c {
            '\r' => {}
            '\u{064B}'..='\u{0652}' | '\u{0640}' if self.remove_diacritics => {}
            '\u{0643}' if self.character_refinement => out.push('\u{06A9}'),
            '\u{064A}' | '\u{0649}' if self.character_refinement => out.push('\u{06CC}'),
            '0'..='9' | '\u{0660}'..='\u{0669}' if self.persian_numbers => {
                out.push(to_persian_digit(c))
            }
            _ => out.push(c),
        }
    }
}

impl Normalizer for PersianNormalizer {
    fn normalize(&self, text: &str) -> Result<String> {
        let mut refined = String::with_capacity(text.len());
        for c in text.nfkc() {
            self.refine_char(c, &mut refined);
        }

        let spaced = RE_SPACES.replace_all(&refined, " ");
        let trimmed = RE_EDGE_SPACES.replace_all(&spaced, "");
        if !self.affix_spacing {
            return Ok(trimmed.into_owned());
        }

        let prefixed = RE_VERB_PREFIX.replace_all(&trimmed, "${1}${2}\u{200C}");
        let suffixed = RE_PLURAL_SUFFIX.replace_all(&prefixed, "${1}\u{200C}${2}${3}");
        Ok(suffixed.into_owned())
    }
}
