//! # Metadata Lookup
//!
//! Fills in a book from its ISBN or a free-text query using the Google Books
//! volumes API. Only the first match is used.
//!
//! ## Outcomes
//!
//! - `Ok(Some(_))`: a candidate was found.
//! - `Ok(None)`: the service answered but found nothing.
//! - `Err(Lookup)`: the service answered with a non-success status.
//! - `Err(Http)`: the request never completed (DNS, TLS, timeout…).
//!
//! Callers are expected to treat "nothing found" as a normal outcome.
//!
//! ## Field Selection
//!
//! | Field | Source |
//! |-------|--------|
//! | `title` | `volumeInfo.title`, else `""` |
//! | `author` | first of `volumeInfo.authors`, else `""` |
//! | `isbn` | `ISBN_13`, else `ISBN_10`, else the searched ISBN (or `""` for text queries) |
//! | `cover_url` | `thumbnail`, else `smallThumbnail`, `http://` upgraded to `https://` |

use crate::config::ReadlogConfig;
use crate::error::{ReadlogError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/books/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub cover_url: Option<String>,
}

/// A source of book metadata.
pub trait BookLookup {
    fn by_isbn(&self, isbn: &str) -> Result<Option<LookupResult>>;

    fn by_query(&self, query: &str) -> Result<Option<LookupResult>>;
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    #[serde(default)]
    authors: Option<Vec<String>>,
    #[serde(default)]
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: String,
    identifier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    thumbnail: Option<String>,
    small_thumbnail: Option<String>,
}

/// Extracts the first candidate from a volumes response body.
pub fn parse_volumes(body: &str, fallback_isbn: &str) -> Result<Option<LookupResult>> {
    let response: VolumesResponse = serde_json::from_str(body)?;
    let Some(volume) = response.items.and_then(|items| items.into_iter().next()) else {
        return Ok(None);
    };
    let info = volume.volume_info;

    let identifiers = info.industry_identifiers.unwrap_or_default();
    let find = |kind: &str| {
        identifiers
            .iter()
            .find(|i| i.kind == kind)
            .map(|i| i.identifier.clone())
    };
    let isbn = find("ISBN_13")
        .or_else(|| find("ISBN_10"))
        .unwrap_or_else(|| fallback_isbn.to_string());

    let cover_url = info
        .image_links
        .and_then(|links| links.thumbnail.or(links.small_thumbnail))
        .map(|url| secure_url(&url));

    Ok(Some(LookupResult {
        title: info.title.unwrap_or_default(),
        author: info
            .authors
            .and_then(|authors| authors.into_iter().next())
            .unwrap_or_default(),
        isbn,
        cover_url,
    }))
}

fn secure_url(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

/// Returns the bare ISBN if `term` looks like one (10 or 13 characters once
/// hyphens and spaces are removed, digits only except a trailing `X` on ISBN-10).
pub fn as_isbn(term: &str) -> Option<String> {
    let cleaned: String = term
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    if !cleaned.is_ascii() {
        return None;
    }

    let valid = match cleaned.len() {
        13 => cleaned.chars().all(|c| c.is_ascii_digit()),
        10 => {
            let (body, check) = cleaned.split_at(9);
            body.chars().all(|c| c.is_ascii_digit())
                && check.chars().all(|c| c.is_ascii_digit() || c == 'X' || c == 'x')
        }
        _ => false,
    };
    valid.then_some(cleaned)
}

pub struct GoogleBooksClient {
    api_base: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl GoogleBooksClient {
    pub fn new(api_base: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_base: api_base.into(),
            api_key,
            client,
        })
    }

    pub fn from_config(config: &ReadlogConfig) -> Result<Self> {
        Self::new(
            config.api_base.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn fetch(&self, mut query: Vec<(&str, String)>) -> Result<String> {
        let url = format!("{}/volumes", self.api_base.trim_end_matches('/'));
        if let Some(q) = query.iter().find(|(k, _)| *k == "q") {
            info!(url = %url, q = %q.1, "looking up book metadata");
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self.client.get(&url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "lookup request failed");
            return Err(ReadlogError::Lookup(format!(
                "Google Books API error: {}",
                status.as_u16()
            )));
        }
        Ok(response.text()?)
    }
}

impl BookLookup for GoogleBooksClient {
    fn by_isbn(&self, isbn: &str) -> Result<Option<LookupResult>> {
        let body = self.fetch(vec![("q", format!("isbn:{}", isbn))])?;
        parse_volumes(&body, isbn)
    }

    fn by_query(&self, query: &str) -> Result<Option<LookupResult>> {
        let body = self.fetch(vec![
            ("q", query.to_string()),
            ("maxResults", "1".to_string()),
        ])?;
        parse_volumes(&body, "")
    }
}
