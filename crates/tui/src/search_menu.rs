use crate::color;
use crate::prompt::Prompt;
use crate::rule;
use notenab_core::path_utils::resolve_under;
use notenab_core::state::AppState;
use notenab_search::render;
use tracing::info;

pub fn search_project(state: &AppState, prompt: &mut Prompt) -> anyhow::Result<bool> {
    rule("Project Search");

    let Some(term) = prompt.ask_required("Enter search term") else {
        return Ok(false);
    };
    let default_root = state.search_root.display().to_string();
    let Some(root) = prompt.ask("Search root", Some(&default_root)) else {
        return Ok(false);
    };
    let root = resolve_under(&state.config.project_root, &root);

    info!("🔍 Searching '{}' under {}", term, root.display());
    let report = notenab_search::search_project(state, &term, Some(&root))?;

    print!("{}", render::render_text(&report.results, &term, Some(&report.root)));
    println!(
        "{}Scanned {} files{}{}",
        color::DIM,
        report.files_scanned,
        if !report.skipped.is_empty() {
            format!(", skipped {} unreadable", report.skipped.len())
        } else {
            String::new()
        },
        color::RESET
    );
    Ok(true)
}
