//! Movie repository trait and in-memory implementation

use crate::demo::demo_movies;
use crate::error::{LibraryError, Result};
use crate::models::Movie;
use crate::query::{sort_movies, SortKey};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Orderings the backend indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovieOrder {
    /// Title ascending
    TitleAsc,
    /// Newest `date_added` first
    DateAddedDesc,
}

impl MovieOrder {
    fn sort_key(self) -> SortKey {
        match self {
            Self::TitleAsc => SortKey::Title,
            Self::DateAddedDesc => SortKey::DateAdded,
        }
    }
}

/// Movie repository interface for the record backend
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// List records in the given order
    ///
    /// # Arguments
    /// * `order` - Backend ordering
    /// * `limit` - Maximum number of records, `None` for all
    async fn list(&self, order: MovieOrder, limit: Option<usize>) -> Result<Vec<Movie>>;

    /// Insert a new record
    ///
    /// # Errors
    /// Returns error if:
    /// - The record fails validation
    /// - A record with the same id already exists
    /// - The backend is unavailable
    async fn create(&self, movie: &Movie) -> Result<()>;

    /// Count stored records
    async fn count(&self) -> Result<usize>;
}

/// Volatile repository holding records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the demo catalogue.
    pub fn with_demo_data() -> Self {
        Self {
            movies: RwLock::new(demo_movies()),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list(&self, order: MovieOrder, limit: Option<usize>) -> Result<Vec<Movie>> {
        let mut movies = self.movies.read().await.clone();
        sort_movies(&mut movies, order.sort_key());
        if let Some(limit) = limit {
            movies.truncate(limit);
        }

        debug!(?order, ?limit, returned = movies.len(), "Listed movies");
        Ok(movies)
    }

    async fn create(&self, movie: &Movie) -> Result<()> {
        movie.validate().map_err(|msg| LibraryError::InvalidInput {
            field: "movie".to_string(),
            message: msg,
        })?;

        let mut movies = self.movies.write().await;
        if movies.iter().any(|existing| existing.id == movie.id) {
            warn!(movie_id = %movie.id, "Rejected duplicate movie id");
            return Err(LibraryError::Duplicate {
                entity_type: "Movie".to_string(),
                id: movie.id.clone(),
            });
        }

        movies.push(movie.clone());
        info!(movie_id = %movie.id, file = %movie.file_name, "Created movie");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.movies.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_movie(id: &str, title: &str, date_added: &str) -> Movie {
        let mut movie = Movie::new(title, format!("/films/{title}.mkv"), 1024, "tester");
        movie.id = id.to_string();
        movie.date_added = date_added.to_string();
        movie
    }

    #[tokio::test]
    async fn test_create_and_count() {
        let repo = InMemoryMovieRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(&make_movie("m1", "Heat", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryMovieRepository::new();
        let movie = make_movie("m1", "Heat", "2024-01-01T00:00:00Z");
        repo.create(&movie).await.unwrap();

        let err = repo.create(&movie).await.unwrap_err();
        assert!(matches!(err, LibraryError::Duplicate { ref id, .. } if id == "m1"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_record() {
        let repo = InMemoryMovieRepository::new();
        let movie = make_movie("m1", "", "2024-01-01T00:00:00Z");

        let err = repo.create(&movie).await.unwrap_err();
        assert!(matches!(err, LibraryError::InvalidInput { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_orders_and_limits() {
        let repo = InMemoryMovieRepository::new();
        repo.create(&make_movie("m1", "Heat", "2024-01-02T00:00:00Z"))
            .await
            .unwrap();
        repo.create(&make_movie("m2", "Alien", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        repo.create(&make_movie("m3", "Zodiac", "2024-01-03T00:00:00Z"))
            .await
            .unwrap();

        let by_title = repo.list(MovieOrder::TitleAsc, None).await.unwrap();
        let titles: Vec<&str> = by_title.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Heat", "Zodiac"]);

        let newest = repo.list(MovieOrder::DateAddedDesc, Some(2)).await.unwrap();
        let ids: Vec<&str> = newest.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m3", "m1"]);
    }

    #[tokio::test]
    async fn test_with_demo_data() {
        let repo = InMemoryMovieRepository::with_demo_data();
        assert_eq!(repo.count().await.unwrap(), 8);

        let probe = repo.list(MovieOrder::TitleAsc, Some(1)).await.unwrap();
        assert_eq!(probe[0].title, "Avatar");
    }
}
