mod models;
mod schema;
mod store;
mod trait_def;

pub use models::*;
pub use schema::WAREHOUSE_SCHEMA;
pub use store::SqliteWarehouseStore;
pub use trait_def::{NoSongLookup, SongLookup};
