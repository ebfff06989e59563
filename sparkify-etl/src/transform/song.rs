use super::{read_json_records, FileTransformer};
use crate::error::{EtlError, Result};
use crate::records::SongRecord;
use crate::warehouse_store::{ArtistRow, RowBatch, SongLookup, SongRow};
use std::path::Path;
use tracing::warn;

/// Produces one song row and one artist row from a song-metadata file.
///
/// The file is expected to hold a single record. Extra records are ignored
/// with a warning.
pub struct SongFileTransformer;

impl SongFileTransformer {
    pub fn rows_from_record(record: SongRecord) -> (SongRow, ArtistRow) {
        let song = SongRow {
            song_id: record.song_id,
            title: record.title,
            artist_id: record.artist_id.clone(),
            year: record.year,
            duration: record.duration,
        };
        let artist = ArtistRow {
            artist_id: record.artist_id,
            name: record.artist_name,
            location: record.artist_location,
            latitude: record.artist_latitude,
            longitude: record.artist_longitude,
        };
        (song, artist)
    }
}

impl FileTransformer for SongFileTransformer {
    fn name(&self) -> &'static str {
        "song"
    }

    fn transform(&self, path: &Path, _lookup: &dyn SongLookup) -> Result<RowBatch> {
        let records: Vec<SongRecord> = read_json_records(path)?;
        let record_count = records.len();

        let Some(record) = records.into_iter().next() else {
            return Err(EtlError::EmptySongFile {
                path: path.to_path_buf(),
            });
        };
        if record_count > 1 {
            warn!(
                "Song file {} holds {} records, ignoring all but the first",
                path.display(),
                record_count
            );
        }

        let (song, artist) = Self::rows_from_record(record);
        Ok(RowBatch {
            songs: vec![song],
            artists: vec![artist],
            ..Default::default()
        })
    }
}
