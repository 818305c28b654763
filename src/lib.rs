//! Workspace placeholder crate.
//!
//! Host applications depend on `film-catalogue-workspace` and enable the
//! `service` feature to pull in the catalogue façade, the library view-model
//! and the runtime configuration without wiring each crate individually.

#[cfg(feature = "service")]
pub use core_library as library;
#[cfg(feature = "service")]
pub use core_runtime as runtime;
#[cfg(feature = "service")]
pub use core_service as service;
