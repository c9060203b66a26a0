/// Splits a line into maximal runs of alphabetic characters, lowercased.
/// Digits, punctuation and whitespace all terminate the current run
/// without becoming part of any word; a run still open at the end of
/// the line is flushed as a completed word.
#[must_use]
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if ch.is_alphabetic() {
            current.extend(ch.to_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_digits_separate_words() {
        let words = split_words("Hello, hello world!123");
        assert_eq!(words, vec!["hello", "hello", "world"]);
    }

    #[test]
    fn test_trailing_run_is_flushed() {
        assert_eq!(split_words("one two"), vec!["one", "two"]);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(split_words("RuSt rUsT"), vec!["rust", "rust"]);
    }

    #[test]
    fn test_no_alphabetic_characters() {
        assert!(split_words("123 456 !!!").is_empty());
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_digits_never_join_words() {
        assert_eq!(split_words("abc123def"), vec!["abc", "def"]);
    }
}
