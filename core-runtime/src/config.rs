//! # Catalogue Configuration Module
//!
//! Provides configuration management for the film catalogue core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`CatalogConfig`] holding the data mode and the dashboard display limits.
//! `build()` validates eagerly so a bad configuration fails at startup rather
//! than when the first view is rendered.
//!
//! ## Data mode
//!
//! The host remembers whether the user chose to explore the demo catalogue or
//! their own library. That choice lives in the host [`SettingsStore`] under
//! [`DataMode::SETTINGS_KEY`]; it is read once with [`DataMode::load`] and then
//! passed explicitly into the configuration. Clearing it is an explicit
//! [`DataMode::reset`].
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::{CatalogConfig, DataMode};
//!
//! let mode = DataMode::load(settings.as_ref()).await?;
//! let config = CatalogConfig::builder()
//!     .data_mode(mode)
//!     .owner_id("user-42")
//!     .build()?;
//! ```
//!
//! ## Error Handling
//!
//! Invalid limits are reported with the offending field:
//!
//! ```
//! use core_runtime::config::CatalogConfig;
//!
//! let err = CatalogConfig::builder().recent_display_limit(0).build();
//! assert!(err.is_err());
//! ```

use crate::error::{Error, Result};
use bridge_traits::SettingsStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Where catalogue records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Built-in demo fixture, nothing is persisted remotely
    Demo,
    /// The user's own records from the hosted backend
    #[default]
    Live,
}

impl DataMode {
    /// Settings key holding the persisted mode.
    pub const SETTINGS_KEY: &'static str = "filmCatalogueMode";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Live => "live",
        }
    }

    /// Only the exact token `"demo"` selects demo mode.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("demo") => Self::Demo,
            _ => Self::Live,
        }
    }

    /// Read the persisted mode; an absent key means [`DataMode::Live`].
    pub async fn load(store: &dyn SettingsStore) -> Result<Self> {
        let raw = store.get_string(Self::SETTINGS_KEY).await?;
        let mode = Self::from_setting(raw.as_deref());
        debug!(mode = mode.as_str(), "Loaded data mode");
        Ok(mode)
    }

    /// Persist this mode so the next [`load`](Self::load) returns it.
    pub async fn persist(self, store: &dyn SettingsStore) -> Result<()> {
        store.set_string(Self::SETTINGS_KEY, self.as_str()).await?;
        info!(mode = self.as_str(), "Persisted data mode");
        Ok(())
    }

    /// Forget the persisted mode.
    pub async fn reset(store: &dyn SettingsStore) -> Result<()> {
        store.delete(Self::SETTINGS_KEY).await?;
        info!("Cleared persisted data mode");
        Ok(())
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the film catalogue core.
///
/// Use [`CatalogConfig::builder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Demo fixture or live backend
    pub data_mode: DataMode,

    /// Owner tag stamped on records created by this client
    pub owner_id: String,

    /// Maximum number of records fetched to build the dashboard
    pub dashboard_snapshot_limit: usize,

    /// Number of records shown in the dashboard "recently added" strip
    pub recent_display_limit: usize,

    /// Number of genres shown in the dashboard distribution chart
    pub genre_distribution_limit: usize,
}

impl CatalogConfig {
    pub const DEFAULT_OWNER_ID: &'static str = "current-user";
    pub const DEFAULT_DASHBOARD_SNAPSHOT_LIMIT: usize = 100;
    pub const DEFAULT_RECENT_DISPLAY_LIMIT: usize = 6;
    pub const DEFAULT_GENRE_DISTRIBUTION_LIMIT: usize = 8;

    /// Create a new configuration builder.
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.owner_id.trim().is_empty() {
            return Err(Error::Config(
                "owner_id cannot be empty. Pass the signed-in user's id, \
                 or rely on the default."
                    .to_string(),
            ));
        }

        if self.dashboard_snapshot_limit == 0 {
            return Err(Error::Config(
                "dashboard_snapshot_limit must be greater than 0".to_string(),
            ));
        }

        if self.recent_display_limit == 0 {
            return Err(Error::Config(
                "recent_display_limit must be greater than 0".to_string(),
            ));
        }

        if self.recent_display_limit > self.dashboard_snapshot_limit {
            return Err(Error::Config(format!(
                "recent_display_limit ({}) cannot exceed dashboard_snapshot_limit ({})",
                self.recent_display_limit, self.dashboard_snapshot_limit
            )));
        }

        if self.genre_distribution_limit == 0 {
            return Err(Error::Config(
                "genre_distribution_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_mode: DataMode::default(),
            owner_id: Self::DEFAULT_OWNER_ID.to_string(),
            dashboard_snapshot_limit: Self::DEFAULT_DASHBOARD_SNAPSHOT_LIMIT,
            recent_display_limit: Self::DEFAULT_RECENT_DISPLAY_LIMIT,
            genre_distribution_limit: Self::DEFAULT_GENRE_DISTRIBUTION_LIMIT,
        }
    }
}

/// Builder for [`CatalogConfig`].
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    data_mode: Option<DataMode>,
    owner_id: Option<String>,
    dashboard_snapshot_limit: Option<usize>,
    recent_display_limit: Option<usize>,
    genre_distribution_limit: Option<usize>,
}

impl CatalogConfigBuilder {
    /// Select demo or live data.
    pub fn data_mode(mut self, mode: DataMode) -> Self {
        self.data_mode = Some(mode);
        self
    }

    /// Set the owner tag for newly created records.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Maximum records fetched for the dashboard (default: 100).
    pub fn dashboard_snapshot_limit(mut self, limit: usize) -> Self {
        self.dashboard_snapshot_limit = Some(limit);
        self
    }

    /// Records in the "recently added" strip (default: 6).
    pub fn recent_display_limit(mut self, limit: usize) -> Self {
        self.recent_display_limit = Some(limit);
        self
    }

    /// Genres in the distribution chart (default: 8).
    pub fn genre_distribution_limit(mut self, limit: usize) -> Self {
        self.genre_distribution_limit = Some(limit);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the owner id is blank or any limit is
    /// zero or inconsistent.
    pub fn build(self) -> Result<CatalogConfig> {
        let defaults = CatalogConfig::default();
        let config = CatalogConfig {
            data_mode: self.data_mode.unwrap_or(defaults.data_mode),
            owner_id: self.owner_id.unwrap_or(defaults.owner_id),
            dashboard_snapshot_limit: self
                .dashboard_snapshot_limit
                .unwrap_or(defaults.dashboard_snapshot_limit),
            recent_display_limit: self
                .recent_display_limit
                .unwrap_or(defaults.recent_display_limit),
            genre_distribution_limit: self
                .genre_distribution_limit
                .unwrap_or(defaults.genre_distribution_limit),
        };

        config.validate()?;
        Ok(config)
    }
}
