//! Duplicate user detection
//!
//! Finds the user records present in both of two collections, matching
//! by full value equality over username, email and password hash.

mod finder;
mod main;

pub use finder::find_duplicates;
pub use main::DuplicateChecker;
