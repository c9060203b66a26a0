use super::words_counter::WordsCounter;
use crate::tools::validate_file_exists;
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::info;
use std::path::PathBuf;

#[derive(Default)]
pub struct WordFrequencyReport;

impl WordFrequencyReport {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== Word Frequency Report ===").cyan().bold());

        let input_path = self.prompt_input_path()?;
        let path = PathBuf::from(&input_path);

        validate_file_exists(&path)?;

        println!("{}", style("Reading file...").dim());

        let mut counter = WordsCounter::new(&path);
        counter.read_words()?;

        self.print_summary(&counter);

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<String> {
        let path: String = Input::new()
            .with_prompt("Path of the text file to analyze")
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn print_summary(&self, counter: &WordsCounter) {
        println!();
        println!("{}", style("=== Frequency Summary ===").cyan().bold());
        println!("  Distinct words: {}", counter.distinct_words());

        println!("  Most frequent:");
        for word in counter.top_max() {
            println!("    {} ({})", word, style(counter.count_of(&word)).green());
        }

        println!("  Least frequent:");
        for word in counter.top_min() {
            println!("    {} ({})", word, style(counter.count_of(&word)).yellow());
        }

        info!("Word frequency report finished - {} distinct words", counter.distinct_words());
    }
}
