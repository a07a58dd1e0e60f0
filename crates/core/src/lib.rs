//! wordcloud-fa - Persian and Arabic text preparation for word clouds.
//!
//! Cleans, tokenizes and counts mixed Persian/Arabic/Latin text, removes
//! stopwords, and reshapes right-to-left words into display order before a
//! layout engine places them.

pub mod api;
pub mod error;
pub mod font;
pub mod layout;
pub mod options;
pub mod stopwords;
pub mod text;

pub use api::TextCloudBuilder;
pub use error::{CloudError, Result};
pub use layout::{LayoutEngine, LayoutRequest, PlacedWord, RankedLayoutEngine, WordLayout};
pub use options::CloudOptions;
pub use stopwords::StopwordSet;
pub use text::FrequencyTable;
