//! Test fixture creation for data directories and databases

use super::constants::*;
use sparkify_etl::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary tree shaped like the production data layout:
/// `song_data/<A>/<B>/<C>/*.json`, `log_data/<year>/<month>/*.json`.
pub struct TestDataset {
    pub dir: TempDir,
}

impl TestDataset {
    /// Empty song and log roots.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("song_data")).unwrap();
        fs::create_dir_all(dir.path().join("log_data")).unwrap();
        TestDataset { dir }
    }

    /// Three song files and two log files.
    pub fn standard() -> Self {
        let dataset = Self::empty();
        dataset.add_song("A/A/A/TRAAAAW128F429D538.json", SONG_1_JSON);
        dataset.add_song("A/B/C/TRABCEI128F424C983.json", SONG_2_JSON);
        dataset.add_song("B/A/A/TRBAAAR128F92F2AD3.json", SONG_3_JSON);
        dataset.add_log("2018/11/2018-11-01-events.json", LOG_DAY_1);
        dataset.add_log("2018/11/2018-11-02-events.json", LOG_DAY_2);
        dataset
    }

    pub fn add_song(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.song_data_dir(), relative, content)
    }

    pub fn add_log(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.log_data_dir(), relative, content)
    }

    pub fn song_data_dir(&self) -> PathBuf {
        self.dir.path().join("song_data")
    }

    pub fn log_data_dir(&self) -> PathBuf {
        self.dir.path().join("log_data")
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("sparkify.db")
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            db_path: self.db_path(),
            song_data_dir: self.song_data_dir(),
            log_data_dir: self.log_data_dir(),
            fresh: false,
        }
    }
}

fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
