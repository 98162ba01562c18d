//! Dataset ingestion.
//!
//! Loads the tabular source dataset into typed rows. The genre column is
//! stored in the file as a stringified list (e.g. `"['Rock', 'Jazz']"`); it
//! is parsed into a proper `Vec<String>` here so the delimited representation
//! never leaks past the ingestion boundary.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read dataset {path}: {source}")]
    Read { path: String, source: csv::Error },
}

/// Raw CSV record, column names as they appear in the dataset header.
#[derive(Debug, Deserialize)]
struct RawRow {
    track_title: String,
    artist_name: String,
    album_title: String,
    art_url: String,
    audio_url: String,
    track_genres: String,
    track_bit_rate: u32,
    track_date_recorded: String,
    track_duration: f64,
}

/// One typed source row.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    pub track_title: String,
    pub artist_name: String,
    pub album_title: String,
    pub art_url: String,
    pub audio_url: String,
    pub genres: Vec<String>,
    pub bit_rate: u32,
    pub date_recorded: String,
    pub duration: f64,
}

impl From<RawRow> for TrackRow {
    fn from(raw: RawRow) -> Self {
        Self {
            track_title: raw.track_title,
            artist_name: raw.artist_name,
            album_title: raw.album_title,
            art_url: raw.art_url,
            audio_url: raw.audio_url,
            genres: parse_genre_list(&raw.track_genres),
            bit_rate: raw.track_bit_rate,
            date_recorded: raw.track_date_recorded,
            duration: raw.track_duration,
        }
    }
}

/// Load and type the dataset, preserving file order.
pub fn load_dataset(path: &Path) -> Result<Vec<TrackRow>, DatasetError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: display.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawRow>() {
        let raw = record.map_err(|source| DatasetError::Read {
            path: display.clone(),
            source,
        })?;
        rows.push(TrackRow::from(raw));
    }
    Ok(rows)
}

/// Parse a stringified genre list into its entries.
///
/// Accepts `"['Rock', 'Jazz']"` as well as bracket-free or differently
/// spaced variants. Entries are trimmed of whitespace and surrounding
/// quotes; empty entries are dropped.
pub fn parse_genre_list(raw: &str) -> Vec<String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(|entry| entry.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
