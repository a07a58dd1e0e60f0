//! Text preparation stages.
//!
//! Each stage is a small function or a trait with one default
//! implementation:
//!
//! - `unhandled`: strip emoji and bidi controls
//! - `normalizer`: Persian letter-form normalization
//! - `numerals`: digit stripping
//! - `tokenizer`: word segmentation
//! - `counter`: frequency counting with collocations
//! - `shaping` and `bidi`: presentation forms and display order
//! - `batch`: whole-list transforms over words

pub mod batch;
pub mod bidi;
pub mod counter;
pub mod normalizer;
pub mod numerals;
pub mod shaping;
pub mod tokenizer;
pub mod unhandled;

pub use batch::{SENTINEL, normalize_words, reshape_words, transform_words};
pub use bidi::display_order;
pub use counter::{
    CollocationCounter, FrequencyCounter, FrequencyTable, UnigramCounter, process_tokens,
    unigrams_and_bigrams,
};
pub use normalizer::{Normalizer, PersianNormalizer};
pub use numerals::strip_numerals;
pub use shaping::{ArabicReshaper, Reshaper};
pub use tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer};
pub use unhandled::strip_unhandled;
