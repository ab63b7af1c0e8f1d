//! Styles for the readlog CLI.
//!
//! Renderers refer to semantic names (an author heading, a muted id) rather
//! than raw colors, so the palette can change in one place. `console` drops
//! the escape codes automatically when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static AUTHOR: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static SERIES: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static NUMBER: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TITLE: Lazy<Style> = Lazy::new(Style::new);
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());

pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
