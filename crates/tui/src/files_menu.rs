use crate::color;
use crate::prompt::{warn_user, Prompt};
use crate::rule;
use notenab_core::path_utils::resolve_under;
use notenab_core::state::AppState;
use notenab_notes::{files, Workspace};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

const CHOICES: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub fn file_management_menu(state: &AppState, prompt: &mut Prompt) -> anyhow::Result<bool> {
    Workspace::new(state).ensure_structure()?;
    let base = state.notes_dir.as_path();

    loop {
        rule("File Management Menu");
        println!("1. List files");
        println!("2. List directories");
        println!("3. View file content");
        println!("4. Create a new file");
        println!("5. Edit a file");
        println!("6. Delete a file");
        println!("7. Move file(s)");
        println!("8. Create a new directory");
        println!("9. Return to Main Menu");

        let Some(choice) = prompt.choose("Enter your choice", &CHOICES, "9") else {
            return Ok(false);
        };

        // Per-action failures are reported and the menu stays open.
        let result = match choice.as_str() {
            "1" => files::list_files(base)
                .map_err(anyhow::Error::from)
                .and_then(|entries| show_listing(base, "Files", &entries))
                .map(Some),
            "2" => files::list_dirs(base)
                .map_err(anyhow::Error::from)
                .and_then(|entries| show_listing(base, "Directories", &entries))
                .map(Some),
            "3" => with_chosen_file(base, prompt, |path| {
                let content = files::view_file(path)?;
                rule(&format!("Content of {}", display_name(path)));
                println!("{}", content);
                Ok(())
            }),
            "4" => create_file(base, prompt),
            "5" => with_chosen_file(base, prompt, edit_file),
            "6" => delete_file(base, prompt),
            "7" => move_files(state, prompt),
            "8" => create_directory(state, prompt),
            _ => return Ok(true),
        };

        match result {
            Ok(Some(())) => {}
            Ok(None) => return Ok(false),
            Err(e) => warn_user(&format!("⚠️ {:#}", e)),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn show_listing(base: &Path, title: &str, entries: &[PathBuf]) -> anyhow::Result<()> {
    if entries.is_empty() {
        println!("{}No {} found in {}.{}", color::YELLOW, title.to_lowercase(), base.display(), color::RESET);
        return Ok(());
    }
    println!("{}{} in {}{}", color::BOLD, title, base.display(), color::RESET);
    for (i, entry) in entries.iter().enumerate() {
        println!("{}{:>5}{}  {}", color::CYAN, i + 1, color::RESET, display_name(entry));
    }
    Ok(())
}

enum Pick {
    Chosen(PathBuf),
    Nothing,
    Quit,
}

/// Lists the files in `base` and lets the user pick one.
fn pick_file(base: &Path, prompt: &mut Prompt) -> anyhow::Result<Pick> {
    let entries = files::list_files(base)?;
    show_listing(base, "Files", &entries)?;
    Ok(match entries.as_slice() {
        [] => Pick::Nothing,
        [only] => Pick::Chosen(only.clone()),
        _ => match prompt.pick_index("Enter the file number", entries.len()) {
            Some(idx) => Pick::Chosen(entries[idx].clone()),
            None => Pick::Quit,
        },
    })
}

fn with_chosen_file(
    base: &Path,
    prompt: &mut Prompt,
    action: impl FnOnce(&Path) -> anyhow::Result<()>,
) -> anyhow::Result<Option<()>> {
    match pick_file(base, prompt)? {
        Pick::Chosen(path) => action(&path)?,
        Pick::Nothing => {}
        Pick::Quit => return Ok(None),
    }
    Ok(Some(()))
}

fn create_file(base: &Path, prompt: &mut Prompt) -> anyhow::Result<Option<()>> {
    let Some(name) = prompt.ask_required("Enter new file name (with extension, e.g. 'example.txt')") else {
        return Ok(None);
    };
    let Some(content) = prompt.ask("Enter content for the new file (leave blank for empty)", Some("")) else {
        return Ok(None);
    };
    let path = files::create_file(base, &name, &content)?;
    println!("{}File {} created successfully.{}", color::GREEN, path.display(), color::RESET);
    Ok(Some(()))
}

fn edit_file(path: &Path) -> anyhow::Result<()> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "nano".to_string());
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("nano");

    println!("Opening {} in {}{}{}...", path.display(), color::BOLD, editor, color::RESET);
    info!("Editing {} with {}", path.display(), editor);
    let status = Command::new(program).args(parts).arg(path).status()?;
    if !status.success() {
        warn_user(&format!("Editor exited with: {}", status));
    }
    Ok(())
}

fn delete_file(base: &Path, prompt: &mut Prompt) -> anyhow::Result<Option<()>> {
    let path = match pick_file(base, prompt)? {
        Pick::Chosen(path) => path,
        Pick::Nothing => return Ok(Some(())),
        Pick::Quit => return Ok(None),
    };
    let question = format!("Are you sure you want to delete {}?", display_name(&path));
    match prompt.confirm(&question, false) {
        Some(true) => {
            files::delete_file(&path)?;
            println!("{}File {} deleted.{}", color::GREEN, display_name(&path), color::RESET);
        }
        Some(false) => println!("Deletion cancelled."),
        None => return Ok(None),
    }
    Ok(Some(()))
}

fn move_files(state: &AppState, prompt: &mut Prompt) -> anyhow::Result<Option<()>> {
    let base = state.notes_dir.as_path();
    let entries = files::list_files(base)?;
    show_listing(base, "Files", &entries)?;
    if entries.is_empty() {
        return Ok(Some(()));
    }

    let Some(indices) = prompt.pick_many("Enter the file numbers (comma-separated)", entries.len()) else {
        return Ok(None);
    };
    let default_target = base.display().to_string();
    let Some(target) = prompt.ask("Enter target directory path", Some(&default_target)) else {
        return Ok(None);
    };
    let target = resolve_under(&state.config.project_root, &target);

    for idx in indices {
        match files::move_file(&entries[idx], &target) {
            Ok(dest) => println!("{}Moved {} -> {}{}", color::GREEN, display_name(&entries[idx]), dest.display(), color::RESET),
            Err(e) => warn_user(&format!("⚠️ {}", e)),
        }
    }
    Ok(Some(()))
}

fn create_directory(state: &AppState, prompt: &mut Prompt) -> anyhow::Result<Option<()>> {
    let Some(parent) = prompt.ask("Enter the parent directory path", Some(".")) else {
        return Ok(None);
    };
    let Some(name) = prompt.ask_required("Enter the name for the new directory") else {
        return Ok(None);
    };
    let parent = resolve_under(&state.config.project_root, &parent);
    let dir = files::create_directory(&parent, &name)?;
    println!("{}Directory {} created successfully.{}", color::GREEN, dir.display(), color::RESET);
    Ok(Some(()))
}
