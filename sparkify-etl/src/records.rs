//! Input record models, as they appear in the song and log JSON files.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Page value of a log event recording that a song was played.
pub const NEXT_SONG_PAGE: &str = "NextSong";

/// One song-metadata record. Carries both the song and its performing artist.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    #[serde(default)]
    pub artist_location: Option<String>,
    #[serde(default)]
    pub artist_latitude: Option<f64>,
    #[serde(default)]
    pub artist_longitude: Option<f64>,
    pub year: i32,
    pub duration: f64,
}

/// One user-activity event from a log file.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub page: String,
    pub ts: i64,
    #[serde(default, deserialize_with = "deserialize_loose_id")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_id")]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub song: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Whether a raw log record is a song play.
///
/// Checked on the untyped record so that other events are dropped without
/// being validated as a [`LogEvent`].
pub fn is_song_play(record: &Value) -> bool {
    record.get("page").and_then(Value::as_str) == Some(NEXT_SONG_PAGE)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Number(i64),
    Text(String),
}

/// Ids are written as numbers by some producers and as strings by others.
/// Empty strings stand for "no id" (logged-out users).
fn deserialize_loose_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LooseId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LooseId::Number(n)) => Ok(Some(n)),
        Some(LooseId::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid id: {:?}", s)))
        }
    }
}
