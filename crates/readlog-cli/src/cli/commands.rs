//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, open the store
//! 3. **Dispatch**: Route commands to the API
//! 4. **Output Formatting**: Text via `render`, or JSON with `--json`

use super::render::{render_books, render_candidate, render_messages, render_tree};
use super::setup::{AddArgs, Cli, Commands, EditArgs};
use anyhow::{Context, Result};
use clap::Parser;
use readlog::api::CmdResult;
use readlog::init::{initialize, ReadlogContext};
use readlog::lookup::{GoogleBooksClient, LookupResult};
use readlog::model::BookInput;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Which part of a `CmdResult` a command's text output shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Tree,
    Books,
    Messages,
    Candidate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    debug!(data_dir = %ctx.data_dir.display(), "context ready");

    let (result, view) = match cli.command {
        None | Some(Commands::List) => (ctx.api.grouped(), View::Tree),
        Some(Commands::Recent) => (ctx.api.list_books()?, View::Books),
        Some(Commands::Add(args)) => (ctx.api.add_book(add_input(args))?, View::Messages),
        Some(Commands::Edit(args)) => (handle_edit(&mut ctx, args)?, View::Messages),
        Some(Commands::Delete { id }) => (ctx.api.delete_book(&id)?, View::Messages),
        Some(Commands::Lookup { term, add, date }) => {
            let term = term.join(" ");
            let client = GoogleBooksClient::from_config(&ctx.config)?;
            let mut result = ctx.api.lookup(&client, &term)?;

            if add {
                if let Some(candidate) = &result.candidate {
                    let mut input = candidate_input(candidate);
                    if let Some(date) = date {
                        input = input.with_date_read(date);
                    }
                    let added = ctx.api.add_book(input)?;
                    result.affected_books = added.affected_books;
                    result.messages.extend(added.messages);
                }
            }
            (result, View::Candidate)
        }
    };

    print_result(&result, view, cli.json)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn add_input(args: AddArgs) -> BookInput {
    let mut input = BookInput::new(args.title, args.author);
    if let Some(isbn) = args.isbn {
        input = input.with_isbn(isbn);
    }
    if let Some(series) = args.series {
        input = input.with_series(series, args.number);
    }
    if let Some(date) = args.date {
        input = input.with_date_read(date);
    }
    if let Some(cover) = args.cover {
        input = input.with_cover_url(cover);
    }
    input
}

/// Applies only the flags that were given on top of the stored record.
pub(crate) fn apply_edit(mut input: BookInput, args: EditArgs) -> BookInput {
    if let Some(title) = args.title {
        input.title = title;
    }
    if let Some(author) = args.author {
        input.author = author;
    }
    if let Some(isbn) = args.isbn {
        input.isbn = isbn;
    }
    if args.no_series {
        input.series_name = None;
        input.series_number = None;
    }
    if let Some(series) = args.series {
        input.series_name = Some(series);
    }
    if args.number.is_some() {
        input.series_number = args.number;
    }
    if let Some(date) = args.date {
        input.date_read = date;
    }
    if args.no_cover {
        input.cover_url = None;
    }
    if let Some(cover) = args.cover {
        input.cover_url = Some(cover);
    }
    input
}

fn handle_edit(ctx: &mut ReadlogContext, args: EditArgs) -> Result<CmdResult> {
    let book = ctx.api.get_book(&args.id)?;
    let id = book.id.to_string();
    let input = apply_edit(book.to_input(), args);
    Ok(ctx.api.update_book(&id, input)?)
}

fn candidate_input(candidate: &LookupResult) -> BookInput {
    let mut input = BookInput::new(candidate.title.clone(), candidate.author.clone())
        .with_isbn(candidate.isbn.clone());
    if let Some(cover) = &candidate.cover_url {
        input = input.with_cover_url(cover.clone());
    }
    input
}

fn print_result(result: &CmdResult, view: View, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(result).context("encoding JSON output")?;
        println!("{}", text);
        return Ok(());
    }

    let body = match view {
        View::Tree => render_tree(&result.groups),
        View::Books => render_books(&result.listed_books),
        View::Candidate => result
            .candidate
            .as_ref()
            .map(render_candidate)
            .unwrap_or_default(),
        View::Messages => String::new(),
    };
    print!("{}", body);
    print!("{}", render_messages(&result.messages));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn edit(args: &[&str]) -> EditArgs {
        let mut argv = vec!["readlog", "edit", "abc"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Commands::Edit(args)) => args,
            other => panic!("unexpected {:?}", other),
        }
    }

    fn stored() -> BookInput {
        BookInput::new("Sharpe's Tiger", "Bernard Cornwell")
            .with_isbn("9780006510321")
            .with_series("Sharpe", Some(1.0))
            .with_cover_url("https://books.example/t.jpg")
            .with_date_read(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_edit_without_flags_keeps_record() {
        assert_eq!(apply_edit(stored(), edit(&[])), stored());
    }

    #[test]
    fn test_edit_number_keeps_series_name() {
        let input = apply_edit(stored(), edit(&["--number", "2.5"]));
        assert_eq!(input.series_name.as_deref(), Some("Sharpe"));
        assert_eq!(input.series_number, Some(2.5));
    }

    #[test]
    fn test_edit_clears_series_and_cover() {
        let input = apply_edit(stored(), edit(&["--no-series", "--no-cover"]));
        assert_eq!(input.series_name, None);
        assert_eq!(input.series_number, None);
        assert_eq!(input.cover_url, None);
        assert_eq!(input.title, "Sharpe's Tiger");
    }

    #[test]
    fn test_edit_title_and_date() {
        let input = apply_edit(stored(), edit(&["--title", "Tiger", "--date", "2024-06-02"]));
        assert_eq!(input.title, "Tiger");
        assert_eq!(
            input.date_read,
            Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_add_input_from_flags() {
        let cli = Cli::try_parse_from([
            "readlog", "add", "--title", "Sharpe's Tiger", "--author", "Bernard Cornwell",
            "--series", "Sharpe", "--number", "1", "--date", "2024-03-01",
        ])
        .unwrap();
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        let input = add_input(args);
        assert_eq!(input.series_name.as_deref(), Some("Sharpe"));
        assert_eq!(input.series_number, Some(1.0));
        assert_eq!(input.isbn, "");
        assert_eq!(input.cover_url, None);
    }

    #[test]
    fn test_candidate_input() {
        let input = candidate_input(&LookupResult {
            title: "Sharpe's Tiger".into(),
            author: "Bernard Cornwell".into(),
            isbn: "9780006510321".into(),
            cover_url: Some("https://books.example/t.jpg".into()),
        });
        assert_eq!(input.isbn, "9780006510321");
        assert_eq!(input.cover_url.as_deref(), Some("https://books.example/t.jpg"));
        assert_eq!(input.series_name, None);
    }
}
