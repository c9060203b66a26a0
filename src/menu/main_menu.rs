use crate::menu::handlers::{run_duplicate_checker, run_word_frequency_report};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

/// Shows the main menu once. Returns `Ok(false)` when the user chose to
/// exit, `Ok(true)` when the loop should show the menu again.
pub fn show_main_menu(term: &Term) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== User & Word Analysis Tools ===").cyan().bold());

    let options = vec![
        "Find duplicate users",
        "Word frequency report",
        "Exit",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a task")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_duplicate_checker(term)?;
            Ok(true)
        }
        Some(1) => {
            run_word_frequency_report(term)?;
            Ok(true)
        }
        Some(2) | None => Ok(false),
        _ => unreachable!(),
    }
}
