//! SQLite-backed warehouse store.
//!
//! The store owns the single connection used for a whole run. Each input file's
//! rows go through [`SqliteWarehouseStore::write_batch`], which commits them in
//! one transaction.

use super::models::*;
use super::schema::WAREHOUSE_SCHEMA;
use super::trait_def::SongLookup;
use crate::error::Result as EtlResult;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::path::Path;
use tracing::{debug, info};

pub struct SqliteWarehouseStore {
    conn: Connection,
}

impl SqliteWarehouseStore {
    /// Open the warehouse database at `db_path`, creating the file and the
    /// schema if needed. An existing database must match the schema.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        let conn = Connection::open_with_flags(
            db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open warehouse database {:?}", db_path))?;

        let store = Self::init(conn)?;
        let counts = store.get_counts()?;
        info!(
            "Opened warehouse at {:?}: {} songs, {} artists, {} users, {} songplays",
            db_path, counts.songs, counts.artists, counts.users, counts.songplays
        );
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        WAREHOUSE_SCHEMA
            .ensure(&conn)
            .context("Warehouse schema check failed")?;
        Ok(Self { conn })
    }

    /// Insert every row of `batch` and commit, or roll everything back on error.
    ///
    /// Returns the number of rows submitted per table. Duplicate songs, artists
    /// and timestamps are ignored by the database; users are upserted.
    pub fn write_batch(&mut self, batch: &RowBatch) -> EtlResult<RowCounts> {
        let tx = self.conn.transaction()?;

        for song in &batch.songs {
            Self::insert_song(&tx, song)?;
        }
        for artist in &batch.artists {
            Self::insert_artist(&tx, artist)?;
        }
        for time in &batch.times {
            Self::insert_time(&tx, time)?;
        }
        for user in &batch.users {
            Self::upsert_user(&tx, user)?;
        }
        for songplay in &batch.songplays {
            Self::insert_songplay(&tx, songplay)?;
        }

        tx.commit()?;
        let counts = batch.row_counts();
        debug!("Committed {} rows", counts.total());
        Ok(counts)
    }

    fn insert_song(tx: &Transaction, song: &SongRow) -> rusqlite::Result<()> {
        tx.prepare_cached(
            "INSERT INTO songs (song_id, title, artist_id, year, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(song_id) DO NOTHING",
        )?
        .execute(params![
            song.song_id,
            song.title,
            song.artist_id,
            song.year,
            song.duration
        ])?;
        Ok(())
    }

    fn insert_artist(tx: &Transaction, artist: &ArtistRow) -> rusqlite::Result<()> {
        tx.prepare_cached(
            "INSERT INTO artists (artist_id, name, location, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(artist_id) DO NOTHING",
        )?
        .execute(params![
            artist.artist_id,
            artist.name,
            artist.location,
            artist.latitude,
            artist.longitude
        ])?;
        Ok(())
    }

    fn insert_time(tx: &Transaction, time: &TimeRow) -> rusqlite::Result<()> {
        tx.prepare_cached(
            "INSERT INTO time (start_time, hour, day, week, month, year, weekday)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(start_time) DO NOTHING",
        )?
        .execute(params![
            time.start_time,
            time.hour,
            time.day,
            time.week,
            time.month,
            time.year,
            time.weekday
        ])?;
        Ok(())
    }

    fn upsert_user(tx: &Transaction, user: &UserRow) -> rusqlite::Result<()> {
        tx.prepare_cached(
            "INSERT INTO users (user_id, first_name, last_name, gender, level)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                gender = excluded.gender,
                level = excluded.level",
        )?
        .execute(params![
            user.user_id,
            user.first_name,
            user.last_name,
            user.gender,
            user.level
        ])?;
        Ok(())
    }

    fn insert_songplay(tx: &Transaction, songplay: &SongplayRow) -> rusqlite::Result<()> {
        tx.prepare_cached(
            "INSERT INTO songplays
                (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?
        .execute(params![
            songplay.start_time,
            songplay.user_id,
            songplay.level,
            songplay.song_id,
            songplay.artist_id,
            songplay.session_id,
            songplay.location,
            songplay.user_agent
        ])?;
        Ok(())
    }

    /// Row counts of the five warehouse tables.
    pub fn get_counts(&self) -> EtlResult<RowCounts> {
        let count = |table: &str| -> rusqlite::Result<usize> {
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
                    r.get::<_, i64>(0)
                })
                .map(|n| n as usize)
        };
        Ok(RowCounts {
            songs: count("songs")?,
            artists: count("artists")?,
            times: count("time")?,
            users: count("users")?,
            songplays: count("songplays")?,
        })
    }

    /// Read-only access to the underlying connection, for inspection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close warehouse database")
    }
}

impl SongLookup for SqliteWarehouseStore {
    fn find_song_and_artist(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> EtlResult<Option<SongMatch>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT songs.song_id, artists.artist_id
             FROM songs JOIN artists ON songs.artist_id = artists.artist_id
             WHERE songs.title = ?1 AND artists.name = ?2 AND songs.duration = ?3
             LIMIT 1",
        )?;
        let found = stmt
            .query_row(params![title, artist_name, duration], |row| {
                Ok(SongMatch {
                    song_id: row.get(0)?,
                    artist_id: row.get(1)?,
                })
            })
            .optional()?;
        Ok(found)
    }
}
