//! # Rendering
//!
//! Plain-text output for the terminal. Layout math (column widths,
//! truncation) is Unicode-aware via `unicode-width`, so titles with wide or
//! combining characters still line up.
//!
//! ## The Tree
//!
//! ```text
//! Austen, Jane
//!   Emma                                              1a2b3c4d
//! Cornwell, Bernard
//!   Sharpe
//!        1  Sharpe's Tiger                            9f8e7d6c
//!        3  Sharpe's Fortress                         0a1b2c3d
//!   Stonehenge                                        4e5f6a7b
//! ```

use super::styles;
use chrono::{DateTime, Utc};
use readlog::api::{CmdMessage, MessageLevel};
use readlog::grouping::AuthorGroup;
use readlog::lookup::LookupResult;
use readlog::model::Book;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const ID_WIDTH: usize = 8;
pub const NUMBER_WIDTH: usize = 5;
pub const AUTHOR_WIDTH: usize = 24;
pub const TIME_WIDTH: usize = 14;

const UNKNOWN_AUTHOR: &str = "(unknown author)";
const ELLIPSIS: char = '…';

/// Truncates or pads `text` to exactly `width` terminal columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    if text.width() <= width {
        out.push_str(text);
        used = text.width();
    } else if width > 0 {
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push(ELLIPSIS);
        used += 1;
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

pub fn format_number(number: Option<f64>) -> String {
    match number {
        None => "-".to_string(),
        Some(n) if n.fract() == 0.0 => format!("{:.0}", n),
        Some(n) => n.to_string(),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn book_line(indent: usize, book: &Book) -> String {
    let title_width = LINE_WIDTH - indent - ID_WIDTH - 1;
    format!(
        "{}{} {}\n",
        " ".repeat(indent),
        styles::TITLE.apply_to(fit(&book.title, title_width)),
        styles::ID.apply_to(book.short_id())
    )
}

/// Renders the author → series → book tree.
pub fn render_tree(groups: &[AuthorGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let heading = if group.display_name.is_empty() {
            UNKNOWN_AUTHOR
        } else {
            group.display_name.as_str()
        };
        out.push_str(&format!("{}\n", styles::AUTHOR.apply_to(heading)));

        for series in &group.series {
            out.push_str(&format!("  {}\n", styles::SERIES.apply_to(&series.series_name)));
            for book in &series.books {
                let number = format!(
                    "{:>width$}  ",
                    format_number(book.series_number),
                    width = NUMBER_WIDTH
                );
                let prefix = styles::NUMBER.apply_to(&number).to_string();
                // styled prefix width is measured on the plain text
                let title_width = LINE_WIDTH - 4 - number.width() - ID_WIDTH - 1;
                out.push_str(&format!(
                    "    {}{} {}\n",
                    prefix,
                    styles::TITLE.apply_to(fit(&book.title, title_width)),
                    styles::ID.apply_to(book.short_id())
                ));
            }
        }

        for book in &group.standalones {
            out.push_str(&book_line(2, book));
        }
    }
    out
}

/// Renders a flat list, one book per line, in the order given.
pub fn render_books(books: &[Book]) -> String {
    let title_width = LINE_WIDTH - ID_WIDTH - AUTHOR_WIDTH - TIME_WIDTH - 6;
    let mut out = String::new();
    for book in books {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            styles::ID.apply_to(book.short_id()),
            styles::TITLE.apply_to(fit(&book.title, title_width)),
            fit(&book.author, AUTHOR_WIDTH),
            styles::TIME.apply_to(format_time_ago(book.date_read))
        ));
    }
    out
}

pub fn render_candidate(candidate: &LookupResult) -> String {
    let mut out = format!(
        "{}\n  by {}\n",
        styles::TITLE.apply_to(&candidate.title),
        styles::AUTHOR.apply_to(if candidate.author.is_empty() {
            UNKNOWN_AUTHOR
        } else {
            candidate.author.as_str()
        })
    );
    if !candidate.isbn.is_empty() {
        out.push_str(&format!("  ISBN {}\n", candidate.isbn));
    }
    if let Some(cover) = &candidate.cover_url {
        out.push_str(&format!("  {}\n", styles::ID.apply_to(cover)));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use readlog::grouping::group_books;
    use readlog::model::BookInput;

    fn plain() {
        console::set_colors_enabled(false);
    }

    fn book(title: &str, author: &str, series: Option<(&str, Option<f64>)>) -> Book {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut input = BookInput::new(title, author).with_date_read(date);
        if let Some((name, number)) = series {
            input = input.with_series(name, number);
        }
        Book::new(input)
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("日本語の本", 6), "日本… ");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(3.0)), "3");
        assert_eq!(format_number(Some(1.5)), "1.5");
        assert_eq!(format_number(None), "-");
    }

    #[test]
    fn test_tree_layout() {
        plain();
        let books = vec![
            book("Stonehenge", "Bernard Cornwell", None),
            book("Sharpe's Fortress", "Bernard Cornwell", Some(("Sharpe", Some(3.0)))),
            book("Sharpe's Tiger", "Bernard Cornwell", Some(("Sharpe", Some(1.0)))),
            book("Emma", "Jane Austen", None),
        ];
        let output = render_tree(&group_books(&books));
        let lines: Vec<&str> = output.lines().map(str::trim_end).collect();

        assert_eq!(lines[0], "Austen, Jane");
        assert!(lines[1].starts_with("  Emma "));
        assert_eq!(lines[2], "Cornwell, Bernard");
        assert_eq!(lines[3], "  Sharpe");
        assert!(lines[4].starts_with("        1  Sharpe's Tiger"));
        assert!(lines[5].starts_with("        3  Sharpe's Fortress"));
        assert!(lines[6].starts_with("  Stonehenge"));
        for line in &lines {
            assert!(line.width() <= LINE_WIDTH, "too wide: {}", line);
        }
    }

    #[test]
    fn test_tree_shows_ids() {
        plain();
        let emma = book("Emma", "Jane Austen", None);
        let output = render_tree(&group_books(&[emma.clone()]));
        assert!(output.contains(&emma.short_id()));
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(render_tree(&[]), "");
    }

    #[test]
    fn test_unknown_author_heading() {
        plain();
        let output = render_tree(&group_books(&[book("Beowulf", "", None)]));
        assert!(output.starts_with(UNKNOWN_AUTHOR));
    }

    #[test]
    fn test_candidate() {
        plain();
        let output = render_candidate(&LookupResult {
            title: "Sharpe's Tiger".into(),
            author: "Bernard Cornwell".into(),
            isbn: "9780006510321".into(),
            cover_url: None,
        });
        assert_eq!(
            output,
            "Sharpe's Tiger\n  by Bernard Cornwell\n  ISBN 9780006510321\n"
        );
    }

    #[test]
    fn test_messages() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Book added"),
            CmdMessage::warning("No match"),
        ]);
        assert_eq!(output, "Book added\nNo match\n");
    }
}
