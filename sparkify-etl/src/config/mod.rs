mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "sparkify.db";
pub const DEFAULT_SONG_DATA_DIR: &str = "data/song_data";
pub const DEFAULT_LOG_DATA_DIR: &str = "data/log_data";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub song_data_dir: Option<PathBuf>,
    pub log_data_dir: Option<PathBuf>,
    pub fresh: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub song_data_dir: PathBuf,
    pub log_data_dir: PathBuf,
    /// Delete an existing database file before loading.
    pub fresh: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present, defaults fill the rest.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        let song_data_dir = file
            .song_data_dir
            .map(PathBuf::from)
            .or_else(|| cli.song_data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SONG_DATA_DIR));
        let log_data_dir = file
            .log_data_dir
            .map(PathBuf::from)
            .or_else(|| cli.log_data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DATA_DIR));
        let fresh = file.fresh.unwrap_or(cli.fresh);

        if db_path.is_dir() {
            bail!("db_path is a directory: {:?}", db_path);
        }
        for dir in [&song_data_dir, &log_data_dir] {
            if dir.exists() && !dir.is_dir() {
                bail!("Data path is not a directory: {:?}", dir);
            }
        }

        Ok(Self {
            db_path,
            song_data_dir,
            log_data_dir,
            fresh,
        })
    }
}
