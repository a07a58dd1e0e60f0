//! Whole-list word transforms.
//!
//! Shaping every word separately is slow, so the words are joined with a
//! line separator, transformed as one string and split back. The separator
//! only goes *between* words: `n` words always produce `n` slots, with no
//! leading or trailing empty slot. A word that already contains the
//! separator would shift every later position, so it is rejected up front,
//! and a transform that changes the number of lines is reported instead of
//! silently misaligning words and weights.

use tracing::trace;

use crate::error::{CloudError, Result};

use super::normalizer::Normalizer;
use super::shaping::Reshaper;

/// Separator placed between words.
pub const SENTINEL: char = '\n';

/// Applies `transform` to all words at once, keeping positions aligned.
///
/// # Errors
/// `SentinelCollision` if a word contains [`SENTINEL`], `Misaligned` if the
/// transform changes the number of slots, or any error from `transform`.
pub fn transform_words<S, F>(words: &[S], transform: F) -> Result<Vec<String>>
where
    S: AsRef<str>,
    F: FnOnce(&str) -> Result<String>,
{
    if words.is_empty() {
        return Ok(Vec::new());
    }
    for (index, word) in words.iter().enumerate() {
        let word: &str = word.as_ref();
        if word.contains(SENTINEL) {
            return Err(CloudError::SentinelCollision {
                index,
                word: word.to_string(),
            });
        }
    }

    let joined = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    let transformed = transform(&joined)?;
    let out: Vec<String> = transformed.split(SENTINEL).map(str::to_string).collect();
    trace!(words = words.len(), bytes = joined.len(), "batch transform");

    if out.len() != words.len() {
        return Err(CloudError::Misaligned {
            expected: words.len(),
            got: out.len(),
        });
    }
    Ok(out)
}

/// Reshapes every word for display.
pub fn reshape_words<S: AsRef<str>>(words: &[S], reshaper: &dyn Reshaper) -> Result<Vec<String>> {
    transform_words(words, |text| reshaper.reshape(text))
}

/// Normalizes every word.
pub fn normalize_words<S: AsRef<str>>(
    words: &[S],
    normalizer: &dyn Normalizer,
) -> Result<Vec<String>> {
    transform_words(words, |text| normalizer.normalize(text))
}
