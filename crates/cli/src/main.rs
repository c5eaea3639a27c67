use clap::{Parser, Subcommand};
use notenab_core::config::AppConfig;
use notenab_core::path_utils::resolve_under;
use notenab_core::state::AppState;
use notenab_notes::{files, segment_file, SegmentPolicy, Workspace};
use notenab_search::{render, scan, ScanOptions};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "notenab - nab notes out of flat text files and search your project", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive menu
    Start,
    /// Split a text file into notes and save them (with a backup copy)
    Nab {
        /// Input file containing `nab:` headers
        #[arg(index = 1)]
        file: PathBuf,
        /// Delimiter policy: next-header or end-marker
        #[arg(long)]
        policy: Option<String>,
        /// Save without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Case-insensitive search across the project
    Search {
        /// Term to look for
        #[arg(index = 1)]
        term: String,
        /// Directory to scan instead of the configured search root
        #[arg(long)]
        root: Option<PathBuf>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Keep hits inside backup mirrors
        #[arg(long)]
        raw: bool,
    },
    /// List the notes directory (or DIR) in natural order
    Ls {
        #[arg(index = 1)]
        dir: Option<PathBuf>,
    },
}

fn init_logging(repl: bool, app_dir: &std::path::Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if repl {
        // REPL mode: only log to file, keep stdout clean for the menus
        let log_file = app_dir.join(notenab_core::LOG_FILE_NAME);
        let file = std::fs::OpenOptions::new().create(true).append(true).open(&log_file);
        match file {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(filter())
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .init();
                return Some(guard);
            }
            Err(e) => eprintln!("⚠️ Cannot open {}: {}. Logging to stderr.", log_file.display(), e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();
    None
}

fn main() {
    let args = Args::parse();
    let app_dir = notenab_core::path_utils::get_app_root();
    let repl = matches!(args.command, Some(Commands::Start) | None);
    let _guard = init_logging(repl, &app_dir);

    notenab_core::init();

    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Error: Configuration invalid: {}", e);
            eprintln!("   Check {}/notenab.toml and NOTENAB_* environment variables.", app_dir.display());
            std::process::exit(1);
        }
    };
    let state = AppState::new(config);

    let result = match args.command {
        Some(Commands::Start) | None => notenab_tui::run(state),
        Some(Commands::Nab { file, policy, yes }) => nab(&state, file, policy, yes),
        Some(Commands::Search { term, root, json, raw }) => search(&state, &term, root, json, raw),
        Some(Commands::Ls { dir }) => ls(&state, dir),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn nab(state: &AppState, file: PathBuf, policy: Option<String>, yes: bool) -> anyhow::Result<()> {
    let policy: SegmentPolicy = policy.as_deref().unwrap_or(state.config.segment_policy.as_str()).parse()?;
    let file = resolve_under(&state.config.project_root, &file.to_string_lossy());

    let notes = segment_file(&file, policy)?;
    if notes.is_empty() {
        println!("No notes found in {}.", file.display());
        return Ok(());
    }

    let records = notes.sorted();
    let width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0).max(9);
    println!("{:<width$}  {:>14}", "Note Name", "Content Length");
    for record in &records {
        println!("{:<width$}  {:>14}", record.name, record.body.chars().count());
    }

    if !yes {
        let mut prompt = notenab_tui::Prompt::new()?;
        if prompt.confirm("Do you want to save these notes?", true) != Some(true) {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let workspace = Workspace::new(state);
    workspace.ensure_structure()?;
    let written = workspace.save_notes(&notes)?;
    info!("📝 Nabbed {} notes from {}", written.len(), file.display());
    println!("✅ Saved {} notes to {} (mirrored to {}).", written.len(), workspace.notes_dir.display(), workspace.backup_dir.display());
    Ok(())
}

fn search(state: &AppState, term: &str, root: Option<PathBuf>, json: bool, raw: bool) -> anyhow::Result<()> {
    let root = root.map(|r| resolve_under(&state.config.project_root, &r.to_string_lossy()));

    let report = if raw {
        let root = root.as_deref().unwrap_or(state.search_root.as_path());
        scan(root, term, &ScanOptions::from_config(&state.config))?
    } else {
        notenab_search::search_project(state, term, root.as_deref())?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&render::render_json(&report.results, term))?);
    } else {
        print!("{}", render::render_text(&report.results, term, Some(&report.root)));
        if !report.skipped.is_empty() {
            eprintln!("⚠️ Skipped {} unreadable files.", report.skipped.len());
        }
    }
    Ok(())
}

fn ls(state: &AppState, dir: Option<PathBuf>) -> anyhow::Result<()> {
    let dir = match dir {
        Some(d) => resolve_under(&state.config.project_root, &d.to_string_lossy()),
        None => state.notes_dir.clone(),
    };
    for entry in files::list_dirs(&dir)? {
        println!("{}/", entry.file_name().map(|n| n.to_string_lossy()).unwrap_or_default());
    }
    for entry in files::list_files(&dir)? {
        println!("{}", entry.file_name().map(|n| n.to_string_lossy()).unwrap_or_default());
    }
    Ok(())
}
