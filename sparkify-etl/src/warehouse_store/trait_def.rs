use super::models::SongMatch;
use crate::error::Result;

/// Resolves a played song to previously loaded song and artist ids.
pub trait SongLookup {
    /// Exact match on song title, artist name and song duration.
    ///
    /// `Ok(None)` means no stored song matches, which is an expected outcome.
    fn find_song_and_artist(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> Result<Option<SongMatch>>;
}

/// Lookup that never resolves anything, for transformers that do not need one.
pub struct NoSongLookup;

impl SongLookup for NoSongLookup {
    fn find_song_and_artist(&self, _: &str, _: &str, _: f64) -> Result<Option<SongMatch>> {
        Ok(None)
    }
}
