//! High-level API module for word cloud preparation.
//!
//! # Example
//!
//! ```ignore
//! use wordcloud_fa_core::api::{word_frequencies, TextCloudBuilder};
//! use wordcloud_fa_core::CloudOptions;
//!
//! let table = word_frequencies("سلام سلام دنیا", None)?;
//! let layout = TextCloudBuilder::new(CloudOptions::default())?.generate("سلام دنیا")?;
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::TextCloudBuilder;
pub use high_level::{generate_layout, generate_layout_from_file, word_frequencies};
