//! Wire models for the catalog service API.
//!
//! Creation payloads are POSTed under a singular wrapper key
//! (`{"artist": {...}}`); responses come back under a `data` envelope.

use serde::{Deserialize, Serialize};

/// Server-assigned entity identifier.
pub type EntityId = u64;

/// Entity as returned by the list endpoints. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntity {
    pub id: EntityId,
    pub name: String,
}

/// `{data: [...]}` envelope around list responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    pub data: Vec<NamedEntity>,
}

/// `{data: {id, ...}}` envelope around creation responses.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateResponse {
    pub data: CreatedEntity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedEntity {
    pub id: EntityId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGenre {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAlbum {
    pub name: String,
    pub art_url: String,
    pub artist_id: EntityId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    pub art_url: String,
    pub audio_url: String,
    pub bit_rate: u32,
    pub date_recorded: String,
    pub duration: f64,
    pub name: String,
    pub artists: Vec<EntityId>,
    pub albums: Vec<EntityId>,
    pub genres: Vec<EntityId>,
    /// Always serialized as `null`; the service fills this in later.
    pub single: Option<bool>,
}

#[derive(Serialize)]
pub(crate) struct ArtistPayload<'a> {
    pub artist: &'a NewArtist,
}

#[derive(Serialize)]
pub(crate) struct GenrePayload<'a> {
    pub genre: &'a NewGenre,
}

#[derive(Serialize)]
pub(crate) struct AlbumPayload<'a> {
    pub album: &'a NewAlbum,
}

#[derive(Serialize)]
pub(crate) struct RecordPayload<'a> {
    pub record: &'a NewRecord,
}
