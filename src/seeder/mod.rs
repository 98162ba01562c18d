//! Seeding passes.
//!
//! Four sequential phases after cache priming:
//! 1. artists
//! 2. genres
//! 3. albums (need artist ids)
//! 4. records (need artist, album and genre ids)
//!
//! Each phase creates only the entities absent from the cache and stores
//! the returned ids so later phases can resolve references. Any failed
//! creation aborts the run; already-created entities stay on the server and
//! are picked up by cache priming on the next run.

mod cache;

pub use cache::EntityCache;

use crate::dataset::TrackRow;
use crate::remote::{
    CatalogApi, EntityId, EntityKind, NewAlbum, NewArtist, NewGenre, NewRecord, RemoteError,
};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("no cached {kind} id for '{name}' while seeding '{dependent}'")]
    UnresolvedReference {
        kind: EntityKind,
        name: String,
        dependent: String,
    },
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub artists_created: u64,
    pub genres_created: u64,
    pub albums_created: u64,
    pub records_created: u64,
    pub rows_skipped: u64,
}

/// Sequential seeder over a loaded dataset.
pub struct Seeder<C: CatalogApi> {
    api: C,
    rows: Vec<TrackRow>,
    cache: EntityCache,
    throttle: Duration,
    stats: SeedStats,
}

impl<C: CatalogApi> Seeder<C> {
    /// `throttle` is slept after each successful record creation.
    pub fn new(api: C, rows: Vec<TrackRow>, throttle: Duration) -> Self {
        Self {
            api,
            rows,
            cache: EntityCache::new(),
            throttle,
            stats: SeedStats::default(),
        }
    }

    /// Run all phases in order and return the counters.
    pub async fn run(&mut self) -> Result<SeedStats, SeedError> {
        self.prime_cache().await?;
        self.seed_artists().await?;
        self.seed_genres().await?;
        self.seed_albums().await?;
        self.seed_records().await?;
        Ok(self.stats)
    }

    /// Index the service's current state by name, one list call per kind.
    ///
    /// A non-success list response leaves that kind's cache empty rather
    /// than failing the run (a fresh deployment has nothing to list), but
    /// is logged: an outage masked here would make the creation passes
    /// re-attempt entities that already exist. Transport errors are fatal.
    async fn prime_cache(&mut self) -> Result<(), SeedError> {
        for kind in EntityKind::ALL {
            match self.api.list(kind).await {
                Ok(entities) => {
                    self.cache.populate(kind, entities);
                    debug!("cache primed with {} existing {}s", self.cache.len(kind), kind);
                }
                Err(RemoteError::ListFailed { kind, status }) => {
                    warn!("listing existing {kind}s returned status {status}, treating as empty");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    async fn seed_artists(&mut self) -> Result<(), SeedError> {
        let names = distinct(self.rows.iter().map(|row| row.artist_name.as_str()));
        for name in names {
            if self.cache.contains(EntityKind::Artist, &name) {
                continue;
            }
            let id = self.api.create_artist(&NewArtist { name: name.clone() }).await?;
            self.cache.insert(EntityKind::Artist, &name, id);
            self.stats.artists_created += 1;
        }
        info!("artists pass complete: {} created", self.stats.artists_created);
        Ok(())
    }

    async fn seed_genres(&mut self) -> Result<(), SeedError> {
        let names = distinct(
            self.rows
                .iter()
                .flat_map(|row| row.genres.iter().map(String::as_str)),
        );
        for name in names {
            if self.cache.contains(EntityKind::Genre, &name) {
                continue;
            }
            let id = self.api.create_genre(&NewGenre { name: name.clone() }).await?;
            self.cache.insert(EntityKind::Genre, &name, id);
            self.stats.genres_created += 1;
        }
        info!("genres pass complete: {} created", self.stats.genres_created);
        Ok(())
    }

    /// The first row bearing each album title supplies its artist and art URL.
    async fn seed_albums(&mut self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for row in &self.rows {
            if !seen.insert(row.album_title.as_str()) {
                continue;
            }
            if self.cache.contains(EntityKind::Album, &row.album_title) {
                continue;
            }
            let artist_id = resolve(
                &self.cache,
                EntityKind::Artist,
                &row.artist_name,
                &row.album_title,
            )?;
            let album = NewAlbum {
                name: row.album_title.clone(),
                art_url: row.art_url.clone(),
                artist_id,
            };
            let id = self.api.create_album(&album).await?;
            self.cache.insert(EntityKind::Album, &row.album_title, id);
            self.stats.albums_created += 1;
        }
        info!("albums pass complete: {} created", self.stats.albums_created);
        Ok(())
    }

    async fn seed_records(&mut self) -> Result<(), SeedError> {
        for row in &self.rows {
            if self.cache.contains(EntityKind::Record, &row.track_title) {
                self.stats.rows_skipped += 1;
                continue;
            }
            let artist_id = resolve(
                &self.cache,
                EntityKind::Artist,
                &row.artist_name,
                &row.track_title,
            )?;
            let album_id = resolve(
                &self.cache,
                EntityKind::Album,
                &row.album_title,
                &row.track_title,
            )?;
            let genre_ids = row
                .genres
                .iter()
                .map(|genre| resolve(&self.cache, EntityKind::Genre, genre, &row.track_title))
                .collect::<Result<Vec<_>, _>>()?;

            let record = NewRecord {
                art_url: row.art_url.clone(),
                audio_url: row.audio_url.clone(),
                bit_rate: row.bit_rate,
                date_recorded: row.date_recorded.clone(),
                duration: row.duration,
                name: row.track_title.clone(),
                artists: vec![artist_id],
                albums: vec![album_id],
                genres: genre_ids,
                single: None,
            };
            let id = self.api.create_record(&record).await?;
            self.cache.insert(EntityKind::Record, &row.track_title, id);
            self.stats.records_created += 1;

            if !self.throttle.is_zero() {
                tokio::time::sleep(self.throttle).await;
            }
        }
        info!(
            "records pass complete: {} created, {} rows skipped",
            self.stats.records_created, self.stats.rows_skipped
        );
        Ok(())
    }
}

fn resolve(
    cache: &EntityCache,
    kind: EntityKind,
    name: &str,
    dependent: &str,
) -> Result<EntityId, SeedError> {
    cache.get(kind, name).ok_or_else(|| SeedError::UnresolvedReference {
        kind,
        name: name.to_string(),
        dependent: dependent.to_string(),
    })
}

/// Distinct values in first-appearance order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
