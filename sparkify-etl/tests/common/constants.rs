//! Shared constants for end-to-end tests
//!
//! When the fixture data changes, update only this file.

// ============================================================================
// Song Files
// ============================================================================

/// Song that the standard log file plays and that resolves
pub const SONG_1_ID: &str = "SOUDSGM12AC9618304";
pub const SONG_1_TITLE: &str = "Insatiable (Instrumental Version)";
pub const SONG_1_DURATION: f64 = 266.39628;
pub const ARTIST_1_ID: &str = "ARNTLGG11E2835DDB9";
pub const ARTIST_1_NAME: &str = "Clp";

/// Song with known coordinates, never played
pub const SONG_2_ID: &str = "SOBLFFE12AF72AA5BA";
pub const ARTIST_2_ID: &str = "ARJNIUY12298900C91";

/// Second song by the first artist, sharing its artist row
pub const SONG_3_ID: &str = "SOXVLOJ12AB0189215";

pub const SONG_1_JSON: &str = r#"{"num_songs": 1, "artist_id": "ARNTLGG11E2835DDB9", "artist_latitude": null, "artist_longitude": null, "artist_location": "", "artist_name": "Clp", "song_id": "SOUDSGM12AC9618304", "title": "Insatiable (Instrumental Version)", "duration": 266.39628, "year": 0}"#;

pub const SONG_2_JSON: &str = r#"{"num_songs": 1, "artist_id": "ARJNIUY12298900C91", "artist_latitude": 40.71455, "artist_longitude": -74.00712, "artist_location": "New York, NY", "artist_name": "Adelitas Way", "song_id": "SOBLFFE12AF72AA5BA", "title": "Scream", "duration": 213.9424, "year": 2009}"#;

pub const SONG_3_JSON: &str = r#"{"num_songs": 1, "artist_id": "ARNTLGG11E2835DDB9", "artist_latitude": null, "artist_longitude": null, "artist_location": "", "artist_name": "Clp", "song_id": "SOXVLOJ12AB0189215", "title": "Amor De Cabaret", "duration": 177.47546, "year": 0}"#;

// ============================================================================
// Log Files
// ============================================================================

/// Number of song plays in the standard log files
pub const SONG_PLAY_COUNT: usize = 4;

/// Distinct users across the standard song plays
pub const USER_COUNT: usize = 2;

/// User whose level changes from free to paid across the log files
pub const UPGRADING_USER_ID: i64 = 15;

/// Timestamp of the resolvable song play, 2018-11-01T21:56:34.796Z
pub const RESOLVED_PLAY_TS: i64 = 1541110994796;

pub const LOG_DAY_1: &str = r#"{"artist":null,"auth":"Logged In","firstName":"Walter","gender":"M","itemInSession":0,"lastName":"Frye","length":null,"level":"free","location":"San Francisco-Oakland-Hayward, CA","method":"GET","page":"Home","registration":1540919166796.0,"sessionId":38,"song":null,"status":200,"ts":1541105830796,"userAgent":"\"Mozilla\/5.0 (Macintosh; Intel Mac OS X 10_9_4)\"","userId":"39"}
{"artist":"Des'ree","auth":"Logged In","firstName":"Kaylee","gender":"F","itemInSession":1,"lastName":"Summers","length":246.30812,"level":"free","location":"Phoenix-Mesa-Scottsdale, AZ","method":"PUT","page":"NextSong","registration":1540344794796.0,"sessionId":139,"song":"You Gotta Be","status":200,"ts":1541106106796,"userAgent":"\"Mozilla\/5.0 (Windows NT 6.1; WOW64)\"","userId":"8"}
{"artist":"Clp","auth":"Logged In","firstName":"Lily","gender":"F","itemInSession":2,"lastName":"Koch","length":266.39628,"level":"free","location":"Chicago-Naperville-Elgin, IL-IN-WI","method":"PUT","page":"NextSong","registration":1541048010796.0,"sessionId":818,"song":"Insatiable (Instrumental Version)","status":200,"ts":1541110994796,"userAgent":"\"Mozilla\/5.0 (X11; Linux x86_64)\"","userId":"15"}
{"artist":null,"auth":"Logged Out","firstName":null,"gender":null,"itemInSession":0,"lastName":null,"length":null,"level":"free","location":null,"method":"PUT","page":"Login","registration":null,"sessionId":52,"song":null,"status":307,"ts":1541207073796,"userAgent":null,"userId":""}
"#;

pub const LOG_DAY_2: &str = r#"{"artist":"Mr Oizo","auth":"Logged In","firstName":"Lily","gender":"F","itemInSession":3,"lastName":"Koch","length":144.03873,"level":"paid","location":"Chicago-Naperville-Elgin, IL-IN-WI","method":"PUT","page":"NextSong","registration":1541048010796.0,"sessionId":818,"song":"Flat 55","status":200,"ts":1541184556796,"userAgent":"\"Mozilla\/5.0 (X11; Linux x86_64)\"","userId":"15"}

{"artist":"Clp","auth":"Logged In","firstName":"Lily","gender":"F","itemInSession":4,"lastName":"Koch","length":200.0,"level":"paid","location":"Chicago-Naperville-Elgin, IL-IN-WI","method":"PUT","page":"NextSong","registration":1541048010796.0,"sessionId":818,"song":"Insatiable (Instrumental Version)","status":200,"ts":1541184800796,"userAgent":"\"Mozilla\/5.0 (X11; Linux x86_64)\"","userId":"15"}
{"artist":null,"auth":"Logged In","firstName":"Lily","gender":"F","itemInSession":5,"lastName":"Koch","length":null,"level":"paid","location":"Chicago-Naperville-Elgin, IL-IN-WI","method":"GET","page":"Settings","registration":1541048010796.0,"sessionId":818,"song":null,"status":200,"ts":1541184900796,"userAgent":"\"Mozilla\/5.0 (X11; Linux x86_64)\"","userId":"15"}
"#;
