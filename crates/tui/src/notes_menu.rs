use crate::color;
use crate::prompt::{warn_user, Prompt};
use crate::rule;
use notenab_core::state::AppState;
use notenab_notes::{segment_file, SegmentPolicy, Workspace};
use std::path::PathBuf;

/// Segment an input file and, after confirmation, save its notes.
/// `Ok(false)` means the user hit Ctrl+D and wants out.
pub fn process_notes_file(state: &AppState, prompt: &mut Prompt) -> anyhow::Result<bool> {
    rule("Note Nabber");
    let workspace = Workspace::new(state);
    workspace.ensure_structure()?;

    let Some(input) = choose_input_file(&workspace, prompt)? else {
        return Ok(true);
    };
    println!("{}Processing file:{} {}", color::CYAN, color::RESET, input.display());

    let policy: SegmentPolicy = state.config.segment_policy.parse()?;
    let notes = segment_file(&input, policy)?;
    if notes.is_empty() {
        println!("{}No notes found in the file.{}", color::YELLOW, color::RESET);
        return Ok(true);
    }

    let records = notes.sorted();
    let width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0).max(9);
    println!();
    println!("{}{:<width$}  {:>14}{}", color::BOLD, "Note Name", "Content Length", color::RESET);
    for record in &records {
        println!("{}{:<width$}{}  {:>14}", color::CYAN, record.name, color::RESET, record.body.chars().count());
    }
    println!();

    match prompt.confirm("Do you want to save these notes?", true) {
        Some(true) => {}
        Some(false) => {
            warn_user("Operation cancelled.");
            return Ok(true);
        }
        None => return Ok(false),
    }

    let written = workspace.save_notes(&notes)?;
    for path in &written {
        println!("{}✔ {}{}", color::GREEN, path.display(), color::RESET);
    }
    println!("{}All {} notes have been saved (mirrored to {}).{}", color::GREEN, written.len(), workspace.backup_dir.display(), color::RESET);
    Ok(true)
}

/// `Ok(None)` when the user cancels or quits.
fn choose_input_file(workspace: &Workspace, prompt: &mut Prompt) -> anyhow::Result<Option<PathBuf>> {
    let files = loop {
        let files = workspace.input_files()?;
        if !files.is_empty() {
            break files;
        }
        println!("{}No input files found in {}.{}", color::YELLOW, workspace.input_dir.display(), color::RESET);
        if prompt.ask("Add .txt files there and press Enter to continue", None).is_none() {
            return Ok(None);
        }
    };

    if let [only] = files.as_slice() {
        let name = only.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        return Ok(match prompt.confirm(&format!("Do you want to work on '{}'?", name), true) {
            Some(true) => Some(only.clone()),
            Some(false) => {
                warn_user("Operation cancelled.");
                None
            }
            None => None,
        });
    }

    println!("Multiple input files found:");
    for (i, f) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, f.file_name().map(|n| n.to_string_lossy()).unwrap_or_default());
    }
    Ok(prompt
        .pick_index("Enter the number of the file you want to process", files.len())
        .map(|idx| files[idx].clone()))
}
