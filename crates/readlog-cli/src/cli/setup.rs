use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "readlog",
    bin_name = "readlog",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A reading log that shelves books by author and series", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to READLOG_DATA, then the OS data dir)
    #[arg(long, global = true, help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show books grouped by author and series
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Show books most recently read first
    #[command(display_order = 2)]
    Recent,

    /// Record a book
    #[command(alias = "a", display_order = 3)]
    Add(AddArgs),

    /// Change a recorded book
    #[command(alias = "e", display_order = 4)]
    Edit(EditArgs),

    /// Remove a book
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Book id (or a unique prefix of it)
        id: String,
    },

    /// Look up metadata by ISBN or free text
    #[command(display_order = 6)]
    Lookup {
        /// ISBN-10, ISBN-13 or search text
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// Add the match to the log
        #[arg(long)]
        add: bool,

        /// Date read for --add (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date, requires = "add")]
        date: Option<DateTime<Utc>>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub isbn: Option<String>,

    /// Series name
    #[arg(long)]
    pub series: Option<String>,

    /// Position in the series (may be fractional, e.g. 1.5)
    #[arg(long, requires = "series", value_parser = parse_series_number)]
    pub number: Option<f64>,

    /// Date read (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,

    /// Cover image URL
    #[arg(long)]
    pub cover: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Book id (or a unique prefix of it)
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub isbn: Option<String>,

    #[arg(long, conflicts_with = "no_series")]
    pub series: Option<String>,

    #[arg(long, conflicts_with = "no_series", value_parser = parse_series_number)]
    pub number: Option<f64>,

    /// Remove the book from its series
    #[arg(long)]
    pub no_series: bool,

    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,

    #[arg(long, conflicts_with = "no_cover")]
    pub cover: Option<String>,

    /// Clear the cover image
    #[arg(long)]
    pub no_cover: bool,
}

/// Parses a series position. Rejects `inf` and `NaN`, which cannot be stored.
pub fn parse_series_number(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("invalid series number '{}', expected a finite number", value)),
    }
}

/// Parses `YYYY-MM-DD` as midnight UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
