//! Domain models for the film catalogue
//!
//! Records mirror the hosted backend's JSON schema (camelCase keys, with the
//! backend's shorter names for a few fields) so snapshots can be deserialized
//! straight from a `list` response.

use crate::error::LibraryError;
use bridge_traits::time::{Clock, SystemClock};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Quality
// =============================================================================

/// Video quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "4K")]
    Uhd4k,
    Unknown,
}

impl Quality {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Hd => "HD",
            Self::Uhd4k => "4K",
            Self::Unknown => "Unknown",
        }
    }

}

impl FromStr for Quality {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SD" => Ok(Self::Sd),
            "HD" => Ok(Self::Hd),
            "4K" => Ok(Self::Uhd4k),
            "Unknown" => Ok(Self::Unknown),
            other => Err(LibraryError::InvalidInput {
                field: "quality".to_string(),
                message: format!("unknown quality '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A single catalogued film file.
///
/// Optional metadata may be missing on any record; consumers substitute
/// neutral defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Opaque identifier, unique within a snapshot
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Genres in display order
    #[serde(rename = "genre", default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Running time in minutes
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Rating, nominally 0-10 (not enforced)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Poster image URL, never fetched by the core
    #[serde(rename = "poster", default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,

    // Source file
    pub file_path: String,
    pub file_name: String,
    #[serde(rename = "fileSize", default)]
    pub file_size_bytes: u64,
    /// Lowercase container token (mp4, mkv, ...); empty when unknown
    #[serde(default)]
    pub format: String,

    // Activity
    /// ISO-8601 timestamp, kept verbatim so malformed values survive a round trip
    pub date_added: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_watched: Option<String>,
    #[serde(default)]
    pub watch_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cast: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// Collection owner
    #[serde(rename = "userId")]
    pub owner_id: String,
}

impl Movie {
    /// Create a record for a newly discovered file.
    ///
    /// The id is a fresh UUID, the file name and format are derived from the
    /// path, and `date_added` is the current instant.
    pub fn new(
        title: impl Into<String>,
        file_path: impl Into<String>,
        file_size_bytes: u64,
        owner_id: impl Into<String>,
    ) -> Self {
        Self::new_with_clock(title, file_path, file_size_bytes, owner_id, &SystemClock)
    }

    /// Like [`Movie::new`], stamping `date_added` from `clock`.
    pub fn new_with_clock(
        title: impl Into<String>,
        file_path: impl Into<String>,
        file_size_bytes: u64,
        owner_id: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        let file_path = file_path.into();
        let file_name = file_name_of(&file_path).to_string();
        let format = format_of(&file_name);
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            year: None,
            genres: Vec::new(),
            director: None,
            duration_minutes: None,
            rating: None,
            poster_url: None,
            file_path,
            file_name,
            file_size_bytes,
            format,
            date_added: clock.now().to_rfc3339_opts(SecondsFormat::Secs, true),
            last_watched: None,
            watch_count: 0,
            description: None,
            cast: Vec::new(),
            quality: None,
            owner_id: owner_id.into(),
        }
    }

    /// Validate record data before it is written.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Movie id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Movie title cannot be empty".to_string());
        }

        Ok(())
    }

    /// Parsed `date_added`, or `None` when the stored value is not an
    /// ISO-8601 date or date-time.
    pub fn date_added_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_added)
    }

    /// Exact, case-sensitive genre membership.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

impl AsRef<Movie> for Movie {
    fn as_ref(&self) -> &Movie {
        self
    }
}

/// RFC 3339 first; a date-time without offset or a bare date reads as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn format_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Scan progress
// =============================================================================

/// Progress snapshot reported while a folder scan is running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanProgress {
    pub is_scanning: bool,
    /// Path currently being inspected
    pub current_path: String,
    pub files_scanned: u64,
    pub total_files: u64,
    pub found_movies: u64,
}

impl ScanProgress {
    /// Fraction of files inspected, in `[0.0, 1.0]`. Zero while the total is unknown.
    pub fn fraction_complete(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        (self.files_scanned as f64 / self.total_files as f64).min(1.0)
    }
}
