//! Title records produced by metadata lookups.
//!
//! Summary records come back from a title search and are immutable once
//! fetched. Detail records are fetched on demand for a single title and are
//! never cached.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque external identifier of a title, unique per title (e.g. `tt0133093`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MediaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Poster artwork for a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Poster {
    /// Absolute URL of the poster image
    Url(String),
    /// The API had no artwork for this title
    Missing,
}

impl Poster {
    /// Value the metadata API uses in place of a missing poster URL.
    pub const MISSING_SENTINEL: &'static str = "N/A";

    /// Interprets a raw poster field, mapping the sentinel and blanks to `Missing`.
    pub fn from_api(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == Self::MISSING_SENTINEL {
            Self::Missing
        } else {
            Self::Url(raw.to_string())
        }
    }

    /// URL to display, substituting `placeholder` when artwork is missing.
    pub fn display_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Self::Url(url) => url,
            Self::Missing => placeholder,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Lightweight per-title data returned by a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: MediaId,
    pub title: String,
    /// Release year as reported, e.g. `1999` or `2008–2013` for series
    pub year: String,
    /// Media type as reported (`movie`, `series`, `episode`, `game`)
    pub media_type: String,
    pub poster: Poster,
}

impl SummaryRecord {
    /// The "year | type" line shown under the title on result cards.
    pub fn subtitle(&self) -> String {
        format!("{} | {}", self.year, self.media_type)
    }
}

/// Extended per-title data fetched when a card's details are opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: MediaId,
    pub plot: String,
    pub rating: String,
    pub actors: String,
}
