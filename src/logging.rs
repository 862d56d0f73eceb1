//! Tracing setup. The terminal UI owns stdout, so events go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::LessonsError;

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a global subscriber appending to `path`, filtered by `RUST_LOG`.
pub fn init(path: &Path) -> Result<(), LessonsError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(LessonsError::Logging)
}
