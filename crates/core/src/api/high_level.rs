//! One-call helpers over [`TextCloudBuilder`].

use std::path::Path;

use crate::error::Result;
use crate::layout::WordLayout;
use crate::options::CloudOptions;
use crate::text::FrequencyTable;

use super::builder::TextCloudBuilder;

/// Frequency table of `text` with stopwords removed and words reshaped,
/// i.e. exactly what the layout engine would receive.
pub fn word_frequencies(text: &str, options: Option<CloudOptions>) -> Result<FrequencyTable> {
    let builder = TextCloudBuilder::new(options.unwrap_or_default())?;
    let counts = builder.process_text(text)?;
    builder.prepare_frequencies(&counts)
}

/// Ranked layout for `text`.
pub fn generate_layout(text: &str, options: Option<CloudOptions>) -> Result<WordLayout> {
    TextCloudBuilder::new(options.unwrap_or_default())?.generate(text)
}

/// Reads a UTF-8 file and generates its ranked layout.
pub fn generate_layout_from_file(
    path: impl AsRef<Path>,
    options: Option<CloudOptions>,
) -> Result<WordLayout> {
    let text = std::fs::read_to_string(path)?;
    generate_layout(&text, options)
}
