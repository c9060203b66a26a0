use super::finder::find_duplicates;
use crate::tools::{User, load_users_from_file, validate_file_exists};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::info;
use std::path::PathBuf;

#[derive(Default)]
pub struct DuplicateChecker;

impl DuplicateChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== Duplicate User Check ===").cyan().bold());

        let path_a = self.prompt_path("Path of the first user list (JSON)")?;
        let path_b = self.prompt_path("Path of the second user list (JSON)")?;

        validate_file_exists(&path_a)?;
        validate_file_exists(&path_b)?;

        let users_a = load_users_from_file(&path_a)?;
        let users_b = load_users_from_file(&path_b)?;

        let duplicates = find_duplicates(&users_a, &users_b);

        self.print_summary(users_a.len(), users_b.len(), &duplicates);

        Ok(())
    }

    fn prompt_path(&self, prompt: &str) -> Result<PathBuf> {
        let path: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn print_summary(&self, total_a: usize, total_b: usize, duplicates: &[User]) {
        println!();
        println!("{}", style("=== Duplicate Check Summary ===").cyan().bold());
        println!("  First list: {total_a} records");
        println!("  Second list: {total_b} records");
        println!(
            "  Found in both: {}",
            style(duplicates.len()).yellow().bold()
        );

        for user in duplicates {
            println!("    {} <{}>", user.username, user.email);
        }

        info!(
            "Duplicate check finished - first: {}, second: {}, duplicates: {}",
            total_a,
            total_b,
            duplicates.len()
        );
    }
}
