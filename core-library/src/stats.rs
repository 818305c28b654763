//! Aggregate statistics over a catalogue snapshot.

use crate::models::{Movie, Quality};
use crate::query::{compare_date_added_desc, sort_movies, SortKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entries in [`LibraryStats::recently_added`].
pub const RECENTLY_ADDED_LIMIT: usize = 5;
/// Entries in [`LibraryStats::most_watched`].
pub const MOST_WATCHED_LIMIT: usize = 5;

/// Derived statistics for a snapshot. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total_count: usize,
    pub total_size_bytes: u64,
    /// A movie with N genres counts once in each of its N buckets
    pub genre_counts: BTreeMap<String, usize>,
    /// Records with an empty format are not counted
    pub format_counts: BTreeMap<String, usize>,
    /// Records without a quality are not counted
    pub quality_counts: BTreeMap<Quality, usize>,
    /// Newest first, at most [`RECENTLY_ADDED_LIMIT`]
    pub recently_added: Vec<Movie>,
    /// Watched at least once, most watched first, at most [`MOST_WATCHED_LIMIT`]
    pub most_watched: Vec<Movie>,
}

/// One bar of the genre distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreShare {
    pub genre: String,
    pub count: usize,
    /// `count` as a percentage of all movies (not of all genre tags)
    pub percent: f64,
}

/// Compute statistics for a full, unfiltered snapshot.
///
/// Never fails; an empty snapshot yields zero totals and empty collections.
pub fn compute_stats(snapshot: &[Movie]) -> LibraryStats {
    let mut stats = LibraryStats {
        total_count: snapshot.len(),
        ..LibraryStats::default()
    };

    for movie in snapshot {
        stats.total_size_bytes = stats.total_size_bytes.saturating_add(movie.file_size_bytes);

        for genre in &movie.genres {
            *stats.genre_counts.entry(genre.clone()).or_insert(0) += 1;
        }

        if !movie.format.is_empty() {
            *stats.format_counts.entry(movie.format.clone()).or_insert(0) += 1;
        }

        if let Some(quality) = movie.quality {
            *stats.quality_counts.entry(quality).or_insert(0) += 1;
        }
    }

    let mut by_date: Vec<&Movie> = snapshot.iter().collect();
    by_date.sort_by(|a, b| compare_date_added_desc(a, b));
    stats.recently_added = by_date
        .into_iter()
        .take(RECENTLY_ADDED_LIMIT)
        .cloned()
        .collect();

    let mut watched: Vec<&Movie> = snapshot.iter().filter(|m| m.watch_count > 0).collect();
    sort_movies(&mut watched, SortKey::WatchCount);
    stats.most_watched = watched
        .into_iter()
        .take(MOST_WATCHED_LIMIT)
        .cloned()
        .collect();

    stats
}

impl LibraryStats {
    /// Genres by descending count (ties alphabetical), at most `limit` entries.
    pub fn genre_distribution(&self, limit: usize) -> Vec<GenreShare> {
        let mut entries: Vec<(&String, &usize)> = self.genre_counts.iter().collect();
        // BTreeMap iteration is already alphabetical; the stable sort keeps it for ties.
        entries.sort_by(|a, b| b.1.cmp(a.1));

        entries
            .into_iter()
            .take(limit)
            .map(|(genre, &count)| GenreShare {
                genre: genre.clone(),
                count,
                percent: if self.total_count == 0 {
                    0.0
                } else {
                    count as f64 / self.total_count as f64 * 100.0
                },
            })
            .collect()
    }

    /// Total number of (movie, genre) pairs.
    pub fn genre_tag_count(&self) -> usize {
        self.genre_counts.values().sum()
    }
}
