//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the film catalogue core:
//! - Logging and tracing infrastructure
//! - Configuration management, including the demo/live data mode
//!
//! ## Overview
//!
//! Other workspace crates depend on this one for the shared configuration
//! value and the logging conventions. Nothing here reads process-wide state:
//! the data mode is loaded once from a host [`SettingsStore`] and threaded
//! through [`CatalogConfig`](config::CatalogConfig).
//!
//! [`SettingsStore`]: bridge_traits::SettingsStore

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CatalogConfig, CatalogConfigBuilder, DataMode};
pub use error::{Error, Result};
