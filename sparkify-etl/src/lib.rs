//! Sparkify ETL library
//!
//! Loads song-metadata and user-activity JSON files into a SQLite warehouse of
//! song plays. Exposes the internal modules for the binary and for testing.

pub mod config;
pub mod discovery;
pub mod error;
pub mod load;
pub mod records;
pub mod sqlite_persistence;
pub mod transform;
pub mod warehouse_store;

pub use error::EtlError;
pub use load::{load_directory, run, LoadReport, RunReport};
pub use warehouse_store::SqliteWarehouseStore;
