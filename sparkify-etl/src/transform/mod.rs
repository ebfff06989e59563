//! Per-file transformation of input records into warehouse rows.

mod log;
mod song;

pub use log::LogFileTransformer;
pub use song::SongFileTransformer;

use crate::error::{EtlError, Result};
use crate::warehouse_store::{RowBatch, SongLookup};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Turns one input file into the rows to write for it.
pub trait FileTransformer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn transform(&self, path: &Path, lookup: &dyn SongLookup) -> Result<RowBatch>;
}

/// Reads every JSON value in the file, in order.
///
/// Values may be separated by newlines (JSON lines) or span several lines.
/// Blank lines are skipped. Content that is not UTF-8 is a parse error.
fn read_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read(path).map_err(|e| EtlError::io(path, e))?;
    serde_json::Deserializer::from_slice(&content)
        .into_iter::<T>()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| EtlError::parse(path, e))
}
