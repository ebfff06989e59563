//! Row models for the warehouse tables.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Row of the `songs` dimension table.
#[derive(Clone, Debug, PartialEq)]
pub struct SongRow {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub duration: f64,
}

/// Row of the `artists` dimension table.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRow {
    pub artist_id: String,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Row of the `time` dimension table, a calendar decomposition of one
/// song-play timestamp.
///
/// Fields are computed in UTC. `week` is the ISO-8601 week number and
/// `weekday` counts from Monday = 0 to Sunday = 6.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeRow {
    pub start_time: DateTime<Utc>,
    pub hour: u32,
    pub day: u32,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub weekday: u32,
}

impl TimeRow {
    pub fn from_timestamp(start_time: DateTime<Utc>) -> Self {
        TimeRow {
            start_time,
            hour: start_time.hour(),
            day: start_time.day(),
            week: start_time.iso_week().week(),
            month: start_time.month(),
            year: start_time.year(),
            weekday: start_time.weekday().num_days_from_monday(),
        }
    }
}

/// Row of the `users` dimension table, a snapshot of one event's user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub level: String,
}

/// Row of the `songplays` fact table.
#[derive(Clone, Debug, PartialEq)]
pub struct SongplayRow {
    pub start_time: DateTime<Utc>,
    pub user_id: i64,
    pub level: String,
    pub song_id: Option<String>,
    pub artist_id: Option<String>,
    pub session_id: i64,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}

/// Song and artist ids resolved for a played song.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongMatch {
    pub song_id: String,
    pub artist_id: String,
}

/// All rows produced from one input file, written as one unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowBatch {
    pub songs: Vec<SongRow>,
    pub artists: Vec<ArtistRow>,
    pub times: Vec<TimeRow>,
    pub users: Vec<UserRow>,
    pub songplays: Vec<SongplayRow>,
}

impl RowBatch {
    pub fn is_empty(&self) -> bool {
        self.row_counts().total() == 0
    }

    pub fn row_counts(&self) -> RowCounts {
        RowCounts {
            songs: self.songs.len(),
            artists: self.artists.len(),
            times: self.times.len(),
            users: self.users.len(),
            songplays: self.songplays.len(),
        }
    }
}

/// Number of rows per table, either written by a load or stored in the database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub songs: usize,
    pub artists: usize,
    pub times: usize,
    pub users: usize,
    pub songplays: usize,
}

impl RowCounts {
    pub fn total(&self) -> usize {
        self.songs + self.artists + self.times + self.users + self.songplays
    }
}

impl std::ops::AddAssign for RowCounts {
    fn add_assign(&mut self, other: Self) {
        self.songs += other.songs;
        self.artists += other.artists;
        self.times += other.times;
        self.users += other.users;
        self.songplays += other.songplays;
    }
}
