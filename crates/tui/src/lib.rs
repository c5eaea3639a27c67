//! notenab REPL - menu-driven front end over the notes and search crates.
//! Uses rustyline for readline-like input.

mod files_menu;
mod notes_menu;
mod prompt;
mod search_menu;

pub use prompt::{parse_choice, parse_index, parse_indices, parse_yes_no, Prompt};

use notenab_core::state::AppState;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ANSI color codes
pub(crate) mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
}

pub(crate) fn rule(title: &str) {
    println!();
    println!("{}{}── {} ──{}", color::BOLD, color::YELLOW, title, color::RESET);
}

/// Main run function
pub fn run(state: AppState) -> anyhow::Result<()> {
    println!();
    println!("{}{}📝 notenab v{}{}", color::BOLD, color::CYAN, VERSION, color::RESET);
    println!("{}Notes: {}{}", color::DIM, state.notes_dir.display(), color::RESET);
    println!("{}Ctrl+C to cancel input, Ctrl+D to quit{}", color::DIM, color::RESET);

    let mut prompt = Prompt::new()?;
    info!("REPL started in {}", state.config.project_root.display());

    loop {
        rule("Main Menu");
        println!("1. Process input notes file");
        println!("2. File management (list, view, create, edit, delete, move)");
        println!("3. Search project");
        println!("4. Exit");

        let Some(choice) = prompt.choose("Enter your choice", &["1", "2", "3", "4"], "4") else {
            break;
        };

        let outcome = match choice.as_str() {
            "1" => notes_menu::process_notes_file(&state, &mut prompt),
            "2" => files_menu::file_management_menu(&state, &mut prompt),
            "3" => search_menu::search_project(&state, &mut prompt),
            _ => break,
        };

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::error!("{:#}", e);
                prompt::warn_user(&format!("⚠️ {:#}", e));
            }
        }
    }

    println!("\n{}📝 Goodbye!{}\n", color::MAGENTA, color::RESET);
    Ok(())
}
