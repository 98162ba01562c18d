//! Remote catalog service interface.
//!
//! `models` holds the wire types, `client` the HTTP implementation. The
//! seeding logic only talks to the [`CatalogApi`] trait so it can be
//! exercised against an in-memory fake in tests.

mod client;
mod models;

pub use client::HttpCatalogClient;
pub use models::{
    EntityId, NamedEntity, NewAlbum, NewArtist, NewGenre, NewRecord,
};

use async_trait::async_trait;
use thiserror::Error;

/// The four entity kinds the catalog service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Artist,
    Genre,
    Album,
    Record,
}

impl EntityKind {
    /// All kinds, in cache-priming order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Artist,
        EntityKind::Genre,
        EntityKind::Album,
        EntityKind::Record,
    ];

    /// URL path segment for this kind's collection.
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artists",
            EntityKind::Genre => "genres",
            EntityKind::Album => "albums",
            EntityKind::Record => "records",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Artist => "artist",
            EntityKind::Genre => "genre",
            EntityKind::Album => "album",
            EntityKind::Record => "record",
        };
        write!(f, "{name}")
    }
}

/// Errors from talking to the catalog service.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("listing {kind}s failed with status {status}")]
    ListFailed { kind: EntityKind, status: u16 },

    #[error("creating {kind} '{name}' failed with status {status}")]
    CreationFailed {
        kind: EntityKind,
        name: String,
        status: u16,
    },

    #[error("failed to decode {kind} response: {source}")]
    Decode {
        kind: EntityKind,
        source: reqwest::Error,
    },
}

/// Client-side view of the catalog service.
///
/// One `list` per kind plus one creation call per kind; every creation
/// returns the server-assigned identifier.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List the current entities of a kind.
    async fn list(&self, kind: EntityKind) -> Result<Vec<NamedEntity>, RemoteError>;

    async fn create_artist(&self, artist: &NewArtist) -> Result<EntityId, RemoteError>;

    async fn create_genre(&self, genre: &NewGenre) -> Result<EntityId, RemoteError>;

    async fn create_album(&self, album: &NewAlbum) -> Result<EntityId, RemoteError>;

    async fn create_record(&self, record: &NewRecord) -> Result<EntityId, RemoteError>;
}
