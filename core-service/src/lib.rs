//! Core service façade and bootstrap helpers.
//!
//! This crate wires a record backend into the catalogue core and produces the
//! view structures a presentation layer renders. Demo mode serves the built-in
//! fixture from memory; live mode requires the host to supply a
//! [`MovieRepository`] talking to the hosted backend.
//!
//! Retrieval failures never reach the caller: the service logs a warning and
//! renders an empty view, the same as an empty catalogue.

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use bridge_traits::SettingsStore;
use core_library::models::Movie;
use core_library::query::{available_formats, available_genres, filter_and_sort, ViewParameters};
use core_library::repositories::{InMemoryMovieRepository, MovieOrder, MovieRepository};
use core_library::stats::{compute_stats, GenreShare, LibraryStats};
use core_runtime::logging::strip_path;
use core_runtime::{CatalogConfig, DataMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Everything the dashboard screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: LibraryStats,
    /// Newest records for the "recently added" strip
    pub recent: Vec<Movie>,
    pub top_genres: Vec<GenreShare>,
    pub mode: DataMode,
}

impl DashboardView {
    fn empty(mode: DataMode) -> Self {
        Self {
            stats: LibraryStats::default(),
            recent: Vec::new(),
            top_genres: Vec::new(),
            mode,
        }
    }
}

/// The library browser screen for one set of view parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryView {
    /// Filtered and sorted records
    pub movies: Vec<Movie>,
    /// Genre options, computed from the unfiltered snapshot
    pub available_genres: Vec<String>,
    /// Format options, computed from the unfiltered snapshot
    pub available_formats: Vec<String>,
    /// Size of the unfiltered snapshot
    pub total_count: usize,
}

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CatalogService {
    config: Arc<CatalogConfig>,
    repository: Arc<dyn MovieRepository>,
}

impl CatalogService {
    /// Create a service for the given configuration.
    ///
    /// Demo mode ignores `live_repository` and serves the built-in fixture.
    /// Live mode requires a repository.
    ///
    /// # Errors
    /// - [`CoreError::InitializationFailed`] if the configuration is invalid
    /// - [`CoreError::CapabilityMissing`] in live mode without a repository
    pub fn bootstrap(
        config: CatalogConfig,
        live_repository: Option<Arc<dyn MovieRepository>>,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;

        let repository: Arc<dyn MovieRepository> = match config.data_mode {
            DataMode::Demo => Arc::new(InMemoryMovieRepository::with_demo_data()),
            DataMode::Live => live_repository.ok_or_else(|| CoreError::CapabilityMissing {
                capability: "MovieRepository".to_string(),
                message: "Live mode requires a record backend".to_string(),
            })?,
        };

        info!(mode = config.data_mode.as_str(), "Catalog service initialized");
        Ok(Self {
            config: Arc::new(config),
            repository,
        })
    }

    /// Bootstrap with default limits and the data mode persisted in `settings`.
    pub async fn from_settings(
        settings: &dyn SettingsStore,
        live_repository: Option<Arc<dyn MovieRepository>>,
    ) -> Result<Self> {
        let mode = DataMode::load(settings).await?;
        let config = CatalogConfig::builder().data_mode(mode).build()?;
        Self::bootstrap(config, live_repository)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn mode(&self) -> DataMode {
        self.config.data_mode
    }

    /// Build the dashboard from the newest records.
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> DashboardView {
        let snapshot = match self
            .repository
            .list(
                MovieOrder::DateAddedDesc,
                Some(self.config.dashboard_snapshot_limit),
            )
            .await
        {
            Ok(movies) => movies,
            Err(err) => {
                warn!(error = %err, "Failed to load dashboard snapshot, showing empty view");
                return DashboardView::empty(self.mode());
            }
        };

        let stats = compute_stats(&snapshot);
        let top_genres = stats.genre_distribution(self.config.genre_distribution_limit);
        let recent = snapshot
            .into_iter()
            .take(self.config.recent_display_limit)
            .collect();

        debug!(total = stats.total_count, "Built dashboard view");
        DashboardView {
            stats,
            recent,
            top_genres,
            mode: self.mode(),
        }
    }

    /// Build the library browser view for `params`.
    #[instrument(skip(self))]
    pub async fn library(&self, params: &ViewParameters) -> LibraryView {
        let snapshot = match self.repository.list(MovieOrder::TitleAsc, None).await {
            Ok(movies) => movies,
            Err(err) => {
                warn!(error = %err, "Failed to load library snapshot, showing empty view");
                return LibraryView::default();
            }
        };

        let movies: Vec<Movie> = filter_and_sort(&snapshot, params)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            matched = movies.len(),
            total = snapshot.len(),
            "Built library view"
        );
        LibraryView {
            movies,
            available_genres: available_genres(&snapshot),
            available_formats: available_formats(&snapshot),
            total_count: snapshot.len(),
        }
    }

    /// Save scan results in order.
    ///
    /// Records without an owner are assigned the configured owner. Stops at
    /// the first failure; records saved before it are kept.
    ///
    /// Returns the number of records saved.
    pub async fn add_movies(&self, movies: Vec<Movie>) -> Result<usize> {
        let mut saved = 0;
        for mut movie in movies {
            if movie.owner_id.trim().is_empty() {
                movie.owner_id = self.config.owner_id.clone();
            }

            if let Err(err) = self.repository.create(&movie).await {
                warn!(
                    saved,
                    file = strip_path(&movie.file_path),
                    error = %err,
                    "Stopped saving scan results"
                );
                return Err(err.into());
            }
            saved += 1;
        }

        info!(saved, "Saved scan results");
        Ok(saved)
    }

    /// Whether the record backend answers a minimal query.
    pub async fn check_ready(&self) -> bool {
        match self.repository.list(MovieOrder::TitleAsc, Some(1)).await {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "Record backend is not ready");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::MemorySettingsStore;

    fn demo_config() -> CatalogConfig {
        CatalogConfig::builder()
            .data_mode(DataMode::Demo)
            .build()
            .unwrap()
    }

    #[test]
    fn test_live_mode_requires_repository() {
        let config = CatalogConfig::builder()
            .data_mode(DataMode::Live)
            .build()
            .unwrap();

        let result = CatalogService::bootstrap(config, None);
        assert!(matches!(
            result,
            Err(CoreError::CapabilityMissing { ref capability, .. }) if capability == "MovieRepository"
        ));
    }

    #[test]
    fn test_invalid_config_fails_initialization() {
        let mut config = demo_config();
        config.recent_display_limit = 0;

        let result = CatalogService::bootstrap(config, None);
        assert!(matches!(result, Err(CoreError::InitializationFailed(_))));
    }

    #[tokio::test]
    async fn test_from_settings_reads_persisted_mode() {
        let store = MemorySettingsStore::new();
        DataMode::Demo.persist(&store).await.unwrap();

        let service = CatalogService::from_settings(&store, None).await.unwrap();
        assert_eq!(service.mode(), DataMode::Demo);
        assert!(service.check_ready().await);
    }

    #[tokio::test]
    async fn test_from_settings_defaults_to_live() {
        let store = MemorySettingsStore::new();
        let result = CatalogService::from_settings(&store, None).await;
        assert!(matches!(result, Err(CoreError::CapabilityMissing { .. })));
    }

    #[tokio::test]
    async fn test_add_movies_assigns_owner() {
        let service = CatalogService::bootstrap(demo_config(), None).unwrap();
        let movie = Movie::new("Home Video", "/Videos/home.mp4", 10, "");

        let saved = service.add_movies(vec![movie]).await.unwrap();
        assert_eq!(saved, 1);

        let view = service
            .library(&ViewParameters::default().with_search("home video"))
            .await;
        assert_eq!(view.movies.len(), 1);
        assert_eq!(view.movies[0].owner_id, "current-user");
        assert_eq!(view.total_count, 9);
    }
}
