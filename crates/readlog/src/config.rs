//! # Configuration
//!
//! Readlog configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `READLOG__API_KEY`, `READLOG__TIMEOUT_SECS`, etc.
//! 2. **Data Directory Config**: `<data dir>/readlog.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api_base` | `https://www.googleapis.com/books/v1` | Metadata lookup endpoint |
//! | `api_key` | none | Google Books API key (optional, raises quota) |
//! | `timeout_secs` | `10` | Lookup request timeout |

use crate::lookup::DEFAULT_API_BASE;
use confique::Config;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "readlog.toml";

/// Configuration for readlog, stored in `readlog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReadlogConfig {
    /// Base URL of the Google Books API
    #[config(default = "https://www.googleapis.com/books/v1")]
    pub api_base: String,

    /// API key appended to lookup requests
    pub api_key: Option<String>,

    /// Lookup request timeout, in seconds
    #[config(default = 10)]
    pub timeout_secs: u64,
}

impl Default for ReadlogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}
