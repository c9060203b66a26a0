//! Task components
//!
//! Each submodule implements one independent task: the core logic plus
//! its interactive wrapper.

pub mod duplicate_checker;
pub mod word_frequency;

pub use duplicate_checker::DuplicateChecker;
pub use word_frequency::WordFrequencyReport;
