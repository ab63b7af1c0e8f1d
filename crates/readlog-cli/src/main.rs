//! # Readlog CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/readlog/`: the library. Grouping engine, store, lookup, scan.
//! - `crates/readlog-cli/`: this binary, depending on the `readlog` library.
//!
//! ## Layering
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/readlog-cli/src/cli/)              │
//! │  - clap argument parsing (setup.rs)                   │
//! │  - Context wiring + dispatch (commands.rs)            │
//! │  - Terminal rendering (render.rs, styles.rs)          │
//! └───────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  API Layer (crates/readlog/src/api.rs)                │
//! │  - Resolves id prefixes, refreshes the catalog        │
//! │  - Returns structured `CmdResult` values              │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. Terminal I/O, exit codes,
//! logging setup and output formatting all happen here.
//!
//! ## Output Streams
//!
//! Rendered output and `--json` go to stdout. Log events and errors go to
//! stderr, so `readlog --json list | jq` works with `-v` on.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
