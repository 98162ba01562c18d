//! Catalog Seeder Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod dataset;
pub mod remote;
pub mod seeder;

// Re-export commonly used types for convenience
pub use config::SeederConfig;
pub use dataset::{load_dataset, TrackRow};
pub use remote::{CatalogApi, EntityKind, HttpCatalogClient, RemoteError};
pub use seeder::{SeedStats, Seeder};
