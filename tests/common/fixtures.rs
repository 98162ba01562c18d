//! Dataset row fixtures.

use catalog_seeder::dataset::TrackRow;

/// A row with fixed media fields; art URL is derived from the album title.
pub fn row(artist: &str, album: &str, track: &str, genres: &[&str]) -> TrackRow {
    row_with_album_art(artist, album, &format!("http://art/{album}"), track, genres)
}

pub fn row_with_album_art(
    artist: &str,
    album: &str,
    art_url: &str,
    track: &str,
    genres: &[&str],
) -> TrackRow {
    TrackRow {
        track_title: track.to_string(),
        artist_name: artist.to_string(),
        album_title: album.to_string(),
        art_url: art_url.to_string(),
        audio_url: format!("http://audio/{track}"),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        bit_rate: 256000,
        date_recorded: "2008-11-26".to_string(),
        duration: 161.0,
    }
}
