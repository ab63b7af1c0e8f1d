//! # Data Directory Resolution
//!
//! Readlog keeps a single library per user. Its location is resolved in order:
//!
//! 1. An explicit override (the CLI's `--data` flag).
//! 2. The `READLOG_DATA` environment variable, used mostly by tests to
//!    isolate state.
//! 3. The OS-appropriate data directory from the `directories` crate.
//!
//! The same directory holds `books.json` and the optional `readlog.toml`.
//!
//! [`initialize`] wires everything together: it loads config, opens the
//! [`FileStore`] and builds a [`ReadlogApi`] whose catalog is already loaded.

use crate::api::ReadlogApi;
use crate::config::{ReadlogConfig, CONFIG_FILE};
use crate::error::{ReadlogError, Result};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_ENV: &str = "READLOG_DATA";

pub struct ReadlogContext {
    pub api: ReadlogApi<FileStore>,
    pub config: ReadlogConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory without touching the filesystem.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "readlog", "readlog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ReadlogError::Store("Could not determine data directory".to_string()))
}

pub fn load_config(data_dir: &std::path::Path) -> ReadlogConfig {
    Clapfig::builder()
        .app_name("readlog")
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<ReadlogContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!(data_dir = %data_dir.display(), "initializing readlog");

    let config = load_config(&data_dir);
    let api = ReadlogApi::new(FileStore::new_fs(data_dir.clone()))?;

    Ok(ReadlogContext {
        api,
        config,
        data_dir,
    })
}
