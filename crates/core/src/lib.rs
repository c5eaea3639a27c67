pub mod config;
pub mod error;
pub mod natural;
pub mod path_utils;
pub mod state;

pub use error::{NabError, Result};

use tracing::info;

/// Log file written under the project root in REPL mode.
pub const LOG_FILE_NAME: &str = "notenab.log";

pub fn init() {
    info!("📝 Nab Core Initialized");
}
