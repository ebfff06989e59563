//! Common test infrastructure
//!
//! Builds throwaway data directories and warehouse databases for end-to-end
//! tests. Tests should only import from this module, not from its submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::TestDataset;
//!
//! #[test]
//! fn test_run() {
//!     let dataset = TestDataset::standard();
//!     let report = sparkify_etl::run(&dataset.config()).unwrap();
//!     assert_eq!(report.songs.files_processed, 3);
//! }
//! ```

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::TestDataset;
