//! # CLI Behavior
//!
//! This is **one possible UI client** for readlog, not the application itself.
//!
//! ## Naked Execution
//!
//! Running `readlog` with no arguments is `readlog list`: the grouped tree.
//!
//! ## Ids
//!
//! Every listing shows the first 8 characters of each book's id. Commands
//! that take an `<id>` accept any unique prefix, so those 8 characters (or
//! fewer) are enough.
//!
//! ## Editing
//!
//! `readlog edit` loads the stored record, applies only the flags given and
//! saves the full record back. `--no-series` and `--no-cover` clear a field.
//!
//! ## Module Structure
//!
//! - `commands`: context wiring, dispatch, tracing setup
//! - `render`: text output for trees, lists and messages
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
