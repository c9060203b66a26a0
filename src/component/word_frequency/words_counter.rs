use super::top_k::{BoundedTopK, WordCount};
use crate::tools::split_words;
use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// How many words each of the two bounded queues retains.
pub const TOP_WORDS_COUNT: usize = 10;

/// Word frequency counter for one text file.
///
/// Freshly constructed it only holds the path; after a successful
/// `read_words` it holds the full count map plus the two bounded
/// queues. The accessors are empty until then.
pub struct WordsCounter {
    path: PathBuf,
    counts: HashMap<String, u64>,
    top_max: BoundedTopK,
    top_min: BoundedTopK,
}

impl WordsCounter {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            counts: HashMap::new(),
            top_max: BoundedTopK::highest(TOP_WORDS_COUNT),
            top_min: BoundedTopK::lowest(TOP_WORDS_COUNT),
        }
    }

    /// Scans the file line by line, counting every lowercased alphabetic
    /// word, then promotes each distinct word with its final count into
    /// both queues.
    ///
    /// Any I/O failure is fatal for the call: the error carries the
    /// underlying cause and the counter stays unpopulated. State is
    /// committed only after the whole file has been read, and a repeated
    /// call replaces the previous state.
    pub fn read_words(&mut self) -> Result<()> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for line in BufReader::new(file).lines() {
            let line =
                line.with_context(|| format!("Failed to read {}", self.path.display()))?;
            for word in split_words(&line) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let mut top_max = BoundedTopK::highest(TOP_WORDS_COUNT);
        let mut top_min = BoundedTopK::lowest(TOP_WORDS_COUNT);
        for (word, &count) in &counts {
            top_max.insert(WordCount {
                word: word.clone(),
                count,
            });
            top_min.insert(WordCount {
                word: word.clone(),
                count,
            });
        }

        self.counts = counts;
        self.top_max = top_max;
        self.top_min = top_min;

        info!(
            "Counted {} distinct words in {}",
            self.counts.len(),
            self.path.display()
        );

        Ok(())
    }

    /// Up to ten words with the highest counts, most frequent first.
    #[must_use]
    pub fn top_max(&self) -> Vec<String> {
        self.top_max.words()
    }

    /// Up to ten words with the lowest counts, least frequent first.
    #[must_use]
    pub fn top_min(&self) -> Vec<String> {
        self.top_min.words()
    }

    /// Final occurrence count of `word`, or zero if it never appeared.
    #[must_use]
    pub fn count_of(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn counter_for(content: &str) -> (NamedTempFile, WordsCounter) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let counter = WordsCounter::new(file.path());
        (file, counter)
    }

    #[test]
    fn test_counts_words_across_lines() {
        let (_file, mut counter) = counter_for("Hello, hello world!123\nworld again\n");
        counter.read_words().unwrap();

        assert_eq!(counter.count_of("hello"), 2);
        assert_eq!(counter.count_of("world"), 2);
        assert_eq!(counter.count_of("again"), 1);
        assert_eq!(counter.count_of("absent"), 0);
        assert_eq!(counter.distinct_words(), 4);
    }

    #[test]
    fn test_line_boundary_flushes_open_run() {
        let (_file, mut counter) = counter_for("ab\ncd");
        counter.read_words().unwrap();

        assert_eq!(counter.count_of("ab"), 1);
        assert_eq!(counter.count_of("cd"), 1);
        assert_eq!(counter.count_of("abcd"), 0);
    }

    #[test]
    fn test_few_distinct_words_fill_both_queues() {
        let (_file, mut counter) = counter_for("one two two three three three\n");
        counter.read_words().unwrap();

        let expected: HashSet<String> =
            ["one", "two", "three"].iter().map(|w| w.to_string()).collect();

        let top_max: HashSet<String> = counter.top_max().into_iter().collect();
        let top_min: HashSet<String> = counter.top_min().into_iter().collect();
        assert_eq!(top_max, expected);
        assert_eq!(top_min, expected);
    }

    #[test]
    fn test_queues_are_bounded_at_ten() {
        // 15 distinct words: "common" appears 20 times, the rest once each.
        let mut content = "common ".repeat(20);
        for i in 0..14 {
            content.push_str(&format!("unique{} ", char::from(b'a' + i)));
        }
        let (_file, mut counter) = counter_for(&content);
        counter.read_words().unwrap();

        let top_max = counter.top_max();
        let top_min = counter.top_min();
        assert_eq!(top_max.len(), 10);
        assert_eq!(top_min.len(), 10);

        // The single frequent word leads the max list and is too common
        // for the min list.
        assert_eq!(top_max[0], "common");
        assert!(!top_min.contains(&"common".to_string()));
    }

    #[test]
    fn test_accessors_before_read_are_empty() {
        let counter = WordsCounter::new(Path::new("unread.txt"));
        assert!(counter.top_max().is_empty());
        assert!(counter.top_min().is_empty());
        assert_eq!(counter.distinct_words(), 0);
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let (_file, mut counter) = counter_for("alpha beta beta gamma\n");
        counter.read_words().unwrap();

        assert_eq!(counter.top_max(), counter.top_max());
        assert_eq!(counter.top_min(), counter.top_min());
    }

    #[test]
    fn test_missing_file_is_fatal_and_leaves_counter_unpopulated() {
        let mut counter = WordsCounter::new(Path::new("/nonexistent/input.txt"));

        let result = counter.read_words();
        assert!(result.is_err());
        assert!(counter.top_max().is_empty());
        assert!(counter.top_min().is_empty());
        assert_eq!(counter.distinct_words(), 0);
    }

    #[test]
    fn test_rereading_replaces_previous_state() {
        let (_file, mut counter) = counter_for("alpha alpha beta\n");
        counter.read_words().unwrap();
        assert_eq!(counter.count_of("alpha"), 2);

        counter.read_words().unwrap();
        assert_eq!(counter.count_of("alpha"), 2);
        assert_eq!(counter.distinct_words(), 2);
        assert_eq!(counter.top_max().len(), 2);
    }

    #[test]
    fn test_empty_file_produces_no_words() {
        let (_file, mut counter) = counter_for("");
        counter.read_words().unwrap();

        assert_eq!(counter.distinct_words(), 0);
        assert!(counter.top_max().is_empty());
        assert!(counter.top_min().is_empty());
    }
}
