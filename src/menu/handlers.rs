use crate::component::{DuplicateChecker, WordFrequencyReport};
use crate::pause;
use anyhow::Result;
use console::{Term, style};

pub fn run_duplicate_checker(term: &Term) -> Result<()> {
    let checker = DuplicateChecker::new();

    if let Err(e) = checker.run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_word_frequency_report(term: &Term) -> Result<()> {
    let report = WordFrequencyReport::new();

    if let Err(e) = report.run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
