//! notenab Notes - segmentation and on-disk note storage
//!
//! This crate is organized into:
//! - types: Core data structures (NoteRecord, NoteMap)
//! - segmenter: Splitting input text into notes
//! - structure: Directory initialization
//! - storage: Writing notes and their backup copies
//! - input: Discovering input files
//! - files: File management over the notes directory

mod types;
mod structure;
mod storage;
mod input;

pub mod segmenter;
pub mod files;

// Re-export public types
pub use types::{NoteMap, NoteRecord};
pub use segmenter::{segment, segment_file, SegmentPolicy};
pub use storage::{write_note, write_notes};

use notenab_core::state::AppState;
use std::path::PathBuf;

/// The three directories notes flow through: input files are segmented,
/// and each note is written to the notes directory and mirrored to backup.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub notes_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub input_dir: PathBuf,
}

impl Workspace {
    pub fn new(state: &AppState) -> Self {
        Self {
            notes_dir: state.notes_dir.clone(),
            backup_dir: state.backup_dir.clone(),
            input_dir: state.input_dir.clone(),
        }
    }

    pub fn from_dirs(notes_dir: PathBuf, backup_dir: PathBuf, input_dir: PathBuf) -> Self {
        Self { notes_dir, backup_dir, input_dir }
    }
}
