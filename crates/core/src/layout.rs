//! Layout engine seam.
//!
//! The builder hands its prepared frequency table to a [`LayoutEngine`]; what
//! the engine produces (a raster, an SVG, a placement list) is opaque to the
//! builder. [`RankedLayoutEngine`] is the built-in engine: it ranks and sizes
//! words the way a word cloud does before placement, without drawing.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::options::CloudOptions;
use crate::text::FrequencyTable;

/// Everything an engine receives for one generation.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    /// Prepared table: stopwords removed, words normalized and reshaped.
    pub frequencies: &'a FrequencyTable,
    /// Per-call font size ceiling, overriding `options.max_font_size`.
    pub max_font_size: Option<f32>,
    /// Resolved font file.
    pub font_path: &'a Path,
    /// Builder options, including canvas parameters.
    pub options: &'a CloudOptions,
}

/// Generates a word cloud from a prepared frequency table.
pub trait LayoutEngine {
    type Output;

    fn generate_from_frequencies(&self, request: &LayoutRequest<'_>) -> Result<Self::Output>;
}

/// One sized word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    /// Weight relative to the heaviest word (0.0, 1.0].
    pub weight: f64,
    pub font_size: f32,
}

/// Ranked and sized words plus the canvas they are meant for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordLayout {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub font_path: PathBuf,
    pub words: Vec<PlacedWord>,
}

impl WordLayout {
    /// Words in rank order.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Renders the layout as a JSON document in memory.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Persists the layout as JSON.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Ranking-only engine.
///
/// Words are sorted by weight, cut to `max_words`, and sized from the canvas
/// height (or the ceiling) with relative scaling between consecutive words.
/// Sizing stops at the first word that would fall below `min_font_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedLayoutEngine;

impl LayoutEngine for RankedLayoutEngine {
    type Output = WordLayout;

    fn generate_from_frequencies(&self, request: &LayoutRequest<'_>) -> Result<WordLayout> {
        let options = request.options;
        let mut ranked: Vec<(&String, f64)> = request
            .frequencies
            .iter()
            .map(|(word, &weight)| (word, weight))
            .filter(|&(_, weight)| weight > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(options.max_words);

        let mut words = Vec::with_capacity(ranked.len());
        if let Some(&(_, max_weight)) = ranked.first() {
            let rs = options.effective_relative_scaling();
            let mut font_size = request
                .max_font_size
                .or(options.max_font_size)
                .unwrap_or(options.height as f32);
            let mut last = 1.0_f64;

            for (word, weight) in ranked {
                let relative = weight / max_weight;
                if rs != 0.0 {
                    font_size = ((rs * (relative / last) as f32 + (1.0 - rs)) * font_size).round();
                }
                if font_size < options.min_font_size {
                    break;
                }
                words.push(PlacedWord {
                    word: word.clone(),
                    weight: relative,
                    font_size,
                });
                last = relative;
            }
        }

        Ok(WordLayout {
            width: options.width,
            height: options.height,
            background_color: options.background_color.clone(),
            font_path: request.font_path.to_path_buf(),
            words,
        })
    }
}
