//! Word frequency analysis
//!
//! Counts every lowercase alphabetic word in a text file and keeps the
//! ten most and ten least frequent words in two bounded queues.

mod main;
mod top_k;
mod words_counter;

pub use main::WordFrequencyReport;
pub use top_k::{BoundedTopK, WordCount};
pub use words_counter::{TOP_WORDS_COUNT, WordsCounter};
