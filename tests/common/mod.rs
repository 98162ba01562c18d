//! Common test infrastructure
//!
//! Provides an in-memory fake of the catalog service API plus dataset row
//! fixtures. Tests should only import from this module, not from internal
//! submodules.

mod fake;
mod fixtures;

pub use fake::{ApiCall, FakeCatalog};
pub use fixtures::{row, row_with_album_art};
