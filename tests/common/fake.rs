//! In-memory fake of the catalog service API.
//!
//! Assigns sequential ids, keeps a log of every call in order, and can be
//! told to fail list or creation calls with a given status.

use async_trait::async_trait;
use catalog_seeder::remote::{
    CatalogApi, EntityId, EntityKind, NamedEntity, NewAlbum, NewArtist, NewGenre, NewRecord,
    RemoteError,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One API call as seen by the fake, in call order.
#[derive(Debug, Clone)]
pub enum ApiCall {
    List(EntityKind),
    CreateArtist { name: String, id: EntityId },
    CreateGenre { name: String, id: EntityId },
    CreateAlbum { album: NewAlbum, id: EntityId },
    CreateRecord { record: NewRecord, id: EntityId },
}

impl ApiCall {
    pub fn is_creation(&self) -> bool {
        !matches!(self, ApiCall::List(_))
    }
}

#[derive(Default)]
struct FakeState {
    next_id: EntityId,
    existing: HashMap<EntityKind, Vec<NamedEntity>>,
    list_status: HashMap<EntityKind, u16>,
    creation_status: HashMap<EntityKind, u16>,
    calls: Vec<ApiCall>,
}

/// Cloneable handle to shared fake state, so tests can keep a handle for
/// assertions after handing a clone to the seeder.
#[derive(Clone)]
pub struct FakeCatalog {
    state: Arc<Mutex<FakeState>>,
}

impl FakeCatalog {
    /// A service with no existing entities.
    pub fn empty() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                next_id: 1,
                ..FakeState::default()
            })),
        }
    }

    /// Pre-seed existing entities of a kind; returns their assigned ids.
    pub fn with_existing(self, kind: EntityKind, names: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for name in names {
                let id = state.next_id;
                state.next_id += 1;
                state.existing.entry(kind).or_default().push(NamedEntity {
                    id,
                    name: name.to_string(),
                });
            }
        }
        self
    }

    /// Make list calls for a kind fail with the given status.
    pub fn failing_list(self, kind: EntityKind, status: u16) -> Self {
        self.state.lock().unwrap().list_status.insert(kind, status);
        self
    }

    /// Make creation calls for a kind fail with the given status.
    pub fn failing_creation(self, kind: EntityKind, status: u16) -> Self {
        self.state
            .lock()
            .unwrap()
            .creation_status
            .insert(kind, status);
        self
    }

    /// Every call, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Successful creation calls, in order.
    pub fn creation_calls(&self) -> Vec<ApiCall> {
        self.calls().into_iter().filter(ApiCall::is_creation).collect()
    }

    fn create(
        &self,
        kind: EntityKind,
        name: &str,
        call: impl FnOnce(EntityId) -> ApiCall,
    ) -> Result<EntityId, RemoteError> {
        let mut state = self.state.lock().unwrap();
        if let Some(&status) = state.creation_status.get(&kind) {
            return Err(RemoteError::CreationFailed {
                kind,
                name: name.to_string(),
                status,
            });
        }
        let id = state.next_id;
        state.next_id += 1;
        state.calls.push(call(id));
        Ok(id)
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list(&self, kind: EntityKind) -> Result<Vec<NamedEntity>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ApiCall::List(kind));
        if let Some(&status) = state.list_status.get(&kind) {
            return Err(RemoteError::ListFailed { kind, status });
        }
        Ok(state.existing.get(&kind).cloned().unwrap_or_default())
    }

    async fn create_artist(&self, artist: &NewArtist) -> Result<EntityId, RemoteError> {
        let name = artist.name.clone();
        self.create(EntityKind::Artist, &artist.name, |id| {
            ApiCall::CreateArtist { name, id }
        })
    }

    async fn create_genre(&self, genre: &NewGenre) -> Result<EntityId, RemoteError> {
        let name = genre.name.clone();
        self.create(EntityKind::Genre, &genre.name, |id| ApiCall::CreateGenre {
            name,
            id,
        })
    }

    async fn create_album(&self, album: &NewAlbum) -> Result<EntityId, RemoteError> {
        let album_clone = album.clone();
        self.create(EntityKind::Album, &album.name, |id| ApiCall::CreateAlbum {
            album: album_clone,
            id,
        })
    }

    async fn create_record(&self, record: &NewRecord) -> Result<EntityId, RemoteError> {
        let record_clone = record.clone();
        self.create(EntityKind::Record, &record.name, |id| {
            ApiCall::CreateRecord {
                record: record_clone,
                id,
            }
        })
    }
}
