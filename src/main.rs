use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use user_word_tools::init;
use user_word_tools::menu::show_main_menu;

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();

    loop {
        match show_main_menu(&term) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style("Goodbye!").green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style("Error:").red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
