//! # Repository Pattern Implementation
//!
//! The hosted backend that owns catalogue records is reached through the
//! [`MovieRepository`] trait. It exposes exactly the query patterns the
//! views need: list ordered by title, list newest first, and create.
//!
//! ## Available Repositories
//!
//! - `InMemoryMovieRepository` - Volatile store used for demo mode and tests
//!
//! Hosts supply their own implementation for the live backend.

pub mod movie;

pub use movie::{InMemoryMovieRepository, MovieOrder, MovieRepository};
