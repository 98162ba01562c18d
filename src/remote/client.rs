//! HTTP client for the catalog service.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::models::{
    AlbumPayload, ArtistPayload, CreateResponse, GenrePayload, ListResponse, RecordPayload,
};
use super::{CatalogApi, EntityId, EntityKind, NamedEntity, NewAlbum, NewArtist, NewGenre,
    NewRecord, RemoteError};

/// Client for the catalog service admin API.
///
/// Sends HTTP Basic credentials and JSON bodies on every call.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    admin_name: String,
    admin_password: String,
}

impl HttpCatalogClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the catalog service (e.g. "https://host:4443")
    /// * `admin_name` / `admin_password` - HTTP Basic credentials
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(
        base_url: &str,
        admin_name: &str,
        admin_password: &str,
        timeout_sec: u64,
    ) -> Result<Self, RemoteError> {
        // Deployments run with self-signed certificates.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(RemoteError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_name: admin_name.to_string(),
            admin_password: admin_password.to_string(),
        })
    }

    fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.base_url, kind.path())
    }

    async fn create<P: Serialize + Sync>(
        &self,
        kind: EntityKind,
        name: &str,
        payload: &P,
    ) -> Result<EntityId, RemoteError> {
        let url = self.collection_url(kind);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.admin_name, Some(&self.admin_password))
            .json(payload)
            .send()
            .await
            .map_err(|source| RemoteError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::CreationFailed {
                kind,
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body: CreateResponse = response
            .json()
            .await
            .map_err(|source| RemoteError::Decode { kind, source })?;
        debug!("created {} '{}' with id {}", kind, name, body.data.id);
        Ok(body.data.id)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list(&self, kind: EntityKind) -> Result<Vec<NamedEntity>, RemoteError> {
        let url = self.collection_url(kind);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.admin_name, Some(&self.admin_password))
            .send()
            .await
            .map_err(|source| RemoteError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::ListFailed {
                kind,
                status: status.as_u16(),
            });
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|source| RemoteError::Decode { kind, source })?;
        Ok(body.data)
    }

    async fn create_artist(&self, artist: &NewArtist) -> Result<EntityId, RemoteError> {
        self.create(EntityKind::Artist, &artist.name, &ArtistPayload { artist })
            .await
    }

    async fn create_genre(&self, genre: &NewGenre) -> Result<EntityId, RemoteError> {
        self.create(EntityKind::Genre, &genre.name, &GenrePayload { genre })
            .await
    }

    async fn create_album(&self, album: &NewAlbum) -> Result<EntityId, RemoteError> {
        self.create(EntityKind::Album, &album.name, &AlbumPayload { album })
            .await
    }

    async fn create_record(&self, record: &NewRecord) -> Result<EntityId, RemoteError> {
        self.create(EntityKind::Record, &record.name, &RecordPayload { record })
            .await
    }
}
