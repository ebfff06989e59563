use super::{read_json_records, FileTransformer};
use crate::error::{EtlError, Result};
use crate::records::{is_song_play, LogEvent};
use crate::warehouse_store::{RowBatch, SongLookup, SongplayRow, TimeRow, UserRow};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Produces time, user and songplay rows from the song plays in a log file.
///
/// Events other than song plays are dropped before any row is derived. Every
/// song play yields exactly one row in each of the three tables.
pub struct LogFileTransformer;

impl LogFileTransformer {
    fn rows_from_event(
        path: &Path,
        event: LogEvent,
        lookup: &dyn SongLookup,
        batch: &mut RowBatch,
    ) -> Result<()> {
        let start_time = event_timestamp(path, event.ts)?;
        let user_id = event
            .user_id
            .ok_or_else(|| missing(path, "userId", event.ts))?;
        let level = event
            .level
            .ok_or_else(|| missing(path, "level", event.ts))?;
        let session_id = event
            .session_id
            .ok_or_else(|| missing(path, "sessionId", event.ts))?;

        let song_match = match (&event.song, &event.artist, event.length) {
            (Some(title), Some(artist), Some(length)) => {
                lookup.find_song_and_artist(title, artist, length)?
            }
            _ => None,
        };
        if song_match.is_none() {
            debug!(
                "No stored song for {:?} by {:?} ({:?}s)",
                event.song, event.artist, event.length
            );
        }

        batch.times.push(TimeRow::from_timestamp(start_time));
        batch.users.push(UserRow {
            user_id,
            first_name: event.first_name,
            last_name: event.last_name,
            gender: event.gender,
            level: level.clone(),
        });
        let (song_id, artist_id) = match song_match {
            Some(m) => (Some(m.song_id), Some(m.artist_id)),
            None => (None, None),
        };
        batch.songplays.push(SongplayRow {
            start_time,
            user_id,
            level,
            song_id,
            artist_id,
            session_id,
            location: event.location,
            user_agent: event.user_agent,
        });
        Ok(())
    }
}

impl FileTransformer for LogFileTransformer {
    fn name(&self) -> &'static str {
        "log"
    }

    fn transform(&self, path: &Path, lookup: &dyn SongLookup) -> Result<RowBatch> {
        let records: Vec<Value> = read_json_records(path)?;
        let total = records.len();

        let mut batch = RowBatch::default();
        for record in records.into_iter().filter(is_song_play) {
            let event: LogEvent =
                serde_json::from_value(record).map_err(|e| EtlError::parse(path, e))?;
            Self::rows_from_event(path, event, lookup, &mut batch)?;
        }

        debug!(
            "{}: {} of {} events are song plays",
            path.display(),
            batch.songplays.len(),
            total
        );
        Ok(batch)
    }
}

/// Converts epoch milliseconds to a UTC timestamp, keeping the milliseconds.
pub fn event_timestamp(path: &Path, ts: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .ok_or_else(|| EtlError::invalid_record(path, format!("timestamp {} is out of range", ts)))
}

fn missing(path: &Path, field: &str, ts: i64) -> EtlError {
    EtlError::invalid_record(path, format!("song play at ts={} has no {}", ts, field))
}
