//! # Catalogue Library Module
//!
//! Owns the film record model and the view-model logic built on top of a
//! catalogue snapshot.
//!
//! ## Overview
//!
//! This module manages:
//! - The `Movie` record and its wire schema
//! - Filtering and sorting for the library view
//! - Aggregate statistics for the dashboard
//! - Repository patterns for record access, plus the built-in demo catalogue

pub mod demo;
pub mod error;
pub mod format;
pub mod models;
pub mod query;
pub mod repositories;
pub mod stats;

pub use demo::demo_movies;
pub use error::{LibraryError, Result};
pub use format::{format_byte_size, format_duration};
pub use models::{Movie, Quality, ScanProgress};
pub use query::{
    available_formats, available_genres, filter_and_sort, sort_movies, CategoryFilter, SortKey,
    ViewParameters,
};
pub use repositories::{InMemoryMovieRepository, MovieOrder, MovieRepository};
pub use stats::{compute_stats, GenreShare, LibraryStats};
