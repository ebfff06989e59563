//! Load driver: discover the files of one data root, transform each of them and
//! commit its rows before moving to the next.

use crate::config::AppConfig;
use crate::discovery::find_json_files;
use crate::transform::{FileTransformer, LogFileTransformer, SongFileTransformer};
use crate::warehouse_store::{RowCounts, SqliteWarehouseStore};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of loading one data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub root: PathBuf,
    pub files_found: usize,
    pub files_processed: usize,
    pub rows_written: RowCounts,
}

/// Runs `transformer` over every `*.json` file under `root`.
///
/// Each file is committed on its own, so a failure leaves all earlier files
/// persisted. The first failure stops the run and is returned.
pub fn load_directory<P: AsRef<Path>>(
    store: &mut SqliteWarehouseStore,
    root: P,
    transformer: &dyn FileTransformer,
) -> Result<LoadReport> {
    let root = root.as_ref();
    let files = find_json_files(root)
        .with_context(|| format!("Failed to list {} files in {:?}", transformer.name(), root))?;

    let files_found = files.len();
    info!("{} files found in {}", files_found, root.display());

    let mut report = LoadReport {
        root: root.to_path_buf(),
        files_found,
        files_processed: 0,
        rows_written: RowCounts::default(),
    };

    for (i, path) in files.iter().enumerate() {
        let batch = transformer
            .transform(path, &*store)
            .with_context(|| format!("Failed to transform {} file {:?}", transformer.name(), path))?;
        let counts = store
            .write_batch(&batch)
            .with_context(|| format!("Failed to write rows of {:?}", path))?;

        report.rows_written += counts;
        report.files_processed += 1;
        info!("{}/{} files processed.", i + 1, files_found);
    }

    Ok(report)
}

/// Outcome of a full run: both phases and the table counts after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub songs: LoadReport,
    pub logs: LoadReport,
    pub table_counts: RowCounts,
}

/// Loads song files then log files into the database of `config`.
///
/// Song files go first so that log files can resolve the songs they mention.
/// The store is closed before returning; on error it is dropped, which also
/// closes it.
pub fn run(config: &AppConfig) -> Result<RunReport> {
    if config.fresh {
        remove_database_files(&config.db_path)?;
    }

    info!("Opening warehouse database at {:?}...", config.db_path);
    let mut store = SqliteWarehouseStore::open(&config.db_path)?;

    info!("Loading song files...");
    let songs = load_directory(&mut store, &config.song_data_dir, &SongFileTransformer)?;

    info!("Loading log files...");
    let logs = load_directory(&mut store, &config.log_data_dir, &LogFileTransformer)?;

    let table_counts = store.get_counts()?;
    store.close()?;

    let mut written = songs.rows_written;
    written += logs.rows_written;
    info!("");
    info!("Load Summary");
    info!("============");
    info!("Song files processed: {}", songs.files_processed);
    info!("Log files processed: {}", logs.files_processed);
    info!("Song rows written: {}", written.songs);
    info!("Artist rows written: {}", written.artists);
    info!("Time rows written: {}", written.times);
    info!("User rows written: {}", written.users);
    info!("Songplay rows written: {}", written.songplays);
    info!("");
    info!("Database contains:");
    info!("  {} songs", table_counts.songs);
    info!("  {} artists", table_counts.artists);
    info!("  {} time entries", table_counts.times);
    info!("  {} users", table_counts.users);
    info!("  {} songplays", table_counts.songplays);

    Ok(RunReport {
        songs,
        logs,
        table_counts,
    })
}

/// Suffixes of the files SQLite keeps next to a database.
const SIDECAR_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

/// Deletes the database file and its journal, WAL and shared-memory files.
///
/// A leftover journal would otherwise be replayed into the new database.
fn remove_database_files(db_path: &Path) -> Result<()> {
    let mut paths = vec![db_path.to_path_buf()];
    for suffix in SIDECAR_SUFFIXES {
        let mut name = db_path.as_os_str().to_owned();
        name.push(suffix);
        paths.push(PathBuf::from(name));
    }

    for path in paths.iter().filter(|p| p.exists()) {
        warn!("Removing existing database file {:?}", path);
        std::fs::remove_file(path).with_context(|| format!("Failed to remove {:?}", path))?;
    }
    Ok(())
}
