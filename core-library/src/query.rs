//! Library view-model: filtering and sorting a snapshot for display.
//!
//! Everything here is a pure function of the snapshot and the view
//! parameters. Records with missing optional fields are never rejected; they
//! sort with neutral defaults instead (see [`SortKey`]).

use crate::error::LibraryError;
use crate::models::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sentinel used by filter controls to mean "no restriction".
pub const ALL_SENTINEL: &str = "all";

/// Sorting options for the library view.
///
/// Every key except `Title` sorts descending. Missing `year` and `rating`
/// count as 0. Records whose `date_added` cannot be parsed sort after every
/// record with a valid timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Title,
    Year,
    DateAdded,
    Rating,
    WatchCount,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::DateAdded => "dateAdded",
            Self::Rating => "rating",
            Self::WatchCount => "watchCount",
        }
    }

}

impl FromStr for SortKey {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "year" => Ok(Self::Year),
            "dateAdded" => Ok(Self::DateAdded),
            "rating" => Ok(Self::Rating),
            "watchCount" => Ok(Self::WatchCount),
            other => Err(LibraryError::InvalidInput {
                field: "sortKey".to_string(),
                message: format!("unknown sort key '{other}'"),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category restriction for the genre and format controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a control value; `"all"` maps to [`CategoryFilter::All`].
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(value) => value,
        }
    }
}

/// User-adjustable parameters of the library view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParameters {
    /// Case-insensitive substring matched against title, director and genres
    pub search_text: String,
    pub genre_filter: CategoryFilter,
    pub format_filter: CategoryFilter,
    pub sort_key: SortKey,
}

impl ViewParameters {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_genre(mut self, filter: CategoryFilter) -> Self {
        self.genre_filter = filter;
        self
    }

    pub fn with_format(mut self, filter: CategoryFilter) -> Self {
        self.format_filter = filter;
        self
    }

    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }
}

/// Filter and sort a snapshot for display.
///
/// The snapshot is left untouched; the result borrows from it. Sorting is
/// stable, so records with equal keys keep their snapshot order.
pub fn filter_and_sort<'a>(snapshot: &'a [Movie], params: &ViewParameters) -> Vec<&'a Movie> {
    let needle = params.search_text.to_lowercase();

    let mut matches: Vec<&Movie> = snapshot
        .iter()
        .filter(|movie| matches_search(movie, &needle))
        .filter(|movie| match &params.genre_filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(genre) => movie.has_genre(genre),
        })
        .filter(|movie| match &params.format_filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(format) => movie.format == *format,
        })
        .collect();

    sort_movies(&mut matches, params.sort_key);
    matches
}

/// `needle` must already be lowercased; an empty needle matches everything.
fn matches_search(movie: &Movie, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    movie.title.to_lowercase().contains(needle)
        || movie
            .director
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || movie
            .genres
            .iter()
            .any(|g| g.to_lowercase().contains(needle))
}

/// Stable in-place sort by `key`.
pub fn sort_movies<M>(movies: &mut [M], key: SortKey)
where
    M: AsRef<Movie>,
{
    movies.sort_by(|a, b| compare_by(a.as_ref(), b.as_ref(), key));
}

pub(crate) fn compare_by(a: &Movie, b: &Movie, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Year => b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)),
        SortKey::DateAdded => compare_date_added_desc(a, b),
        SortKey::Rating => rating_or_zero(b).total_cmp(&rating_or_zero(a)),
        SortKey::WatchCount => b.watch_count.cmp(&a.watch_count),
    }
}

/// Ordering that ignores case and accents ("Élite" sorts with "Elite").
///
/// Titles equal under that folding fall back to an accent-aware comparison,
/// then lowercase before uppercase.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a)
        .cmp(&title_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Canonical decomposition with combining marks dropped, then lowercased.
fn title_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Newest first; unparsable timestamps after all valid ones.
pub(crate) fn compare_date_added_desc(a: &Movie, b: &Movie) -> Ordering {
    match (a.date_added_at(), b.date_added_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn rating_or_zero(movie: &Movie) -> f64 {
    match movie.rating {
        Some(r) if !r.is_nan() => r,
        _ => 0.0,
    }
}

/// Distinct genres across the snapshot, sorted, for the genre control.
pub fn available_genres(snapshot: &[Movie]) -> Vec<String> {
    snapshot
        .iter()
        .flat_map(|movie| movie.genres.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty formats across the snapshot, sorted, for the format control.
pub fn available_formats(snapshot: &[Movie]) -> Vec<String> {
    snapshot
        .iter()
        .filter(|movie| !movie.format.is_empty())
        .map(|movie| movie.format.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
