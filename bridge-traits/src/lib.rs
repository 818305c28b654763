//! # Host Bridge Traits
//!
//! Capability traits the film catalogue core expects its host to provide.
//!
//! ## Overview
//!
//! The core never reaches for ambient process state. Anything that lives in
//! the host is injected through one of the traits below.
//!
//! ## Traits
//!
//! - [`SettingsStore`](storage::SettingsStore) - Key-value preferences storage
//!   (holds the demo/live mode flag)
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//! - [`Clock`](time::Clock) - Current instant for stamping new records
//!
//! Reference implementations ([`MemorySettingsStore`], [`ConsoleLogger`],
//! [`SystemClock`]) are shipped for tests and simple desktop hosts.
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Host
//! implementations should convert their platform errors into it and keep the
//! message actionable.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so implementations can be shared
//! across async tasks.

pub mod error;
pub mod logging;
pub mod storage;
pub mod time;

pub use error::BridgeError;

pub use storage::{MemorySettingsStore, SettingsStore};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use time::{Clock, SystemClock};
