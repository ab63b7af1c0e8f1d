//! # Author Names and Collation
//!
//! Authors are typed in however the user feels like it: "Bernard Cornwell",
//! "Cornwell, Bernard", "  Bernard   Cornwell ". Grouping and sorting need one
//! canonical key per person, so names are normalized to `"Surname, Forenames"`.
//!
//! ## Normalization Rules
//!
//! 1. Trim. Empty input gives an empty key.
//! 2. A name that already contains a comma is taken as normalized and kept verbatim.
//! 3. One word stays as is (`"Plato"`).
//! 4. Otherwise the last word is the surname: `"Ursula K. Le Guin"` → `"Guin, Ursula K. Le"`.
//!
//! Rule 4 knows nothing about particles like "van" or "de la". That is a
//! known limitation, not something to patch around here.
//!
//! ## Collation
//!
//! Alphabetical ordering compares *base keys*: the string decomposed to NFD,
//! stripped of combining marks, then lowercased. `"Émile"`, `"emile"` and
//! `"EMILE"` share a base key.
//!
//! - [`collate_base`]: base keys only. Base-equal strings compare `Equal`.
//! - [`collate`]: base keys, then accents (unaccented first), then case
//!   (lowercase first), so distinct strings never tie.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Converts a free-form personal name to `"Surname, Forename(s)"`.
pub fn normalize_author(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.contains(',') {
        return trimmed.to_string();
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts.split_last() {
        Some((surname, forenames)) if !forenames.is_empty() => {
            format!("{}, {}", surname, forenames.join(" "))
        }
        _ => trimmed.to_string(),
    }
}

/// Orders two raw author names by their normalized form, surname first.
pub fn compare_authors(a: &str, b: &str) -> Ordering {
    collate_base(&normalize_author(a), &normalize_author(b))
}

/// Case- and accent-insensitive comparison.
pub fn collate_base(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b))
}

/// Alphabetical comparison used for series names and titles.
pub fn collate(a: &str, b: &str) -> Ordering {
    collate_base(a, b)
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        // case-only difference: lowercase first
        .then_with(|| b.cmp(a))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
