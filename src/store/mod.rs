//! # Record Store
//!
//! Loads an address table from CSV and hands out rows by their 1-based
//! identifier. Row order is source order; identifier `n` is the `n`-th data
//! row after the header.
//!
//! ## Load errors
//!
//! - [`StoreError::NotFound`]: the file does not exist
//! - [`StoreError::ParseError`]: the source has no header row
//! - [`StoreError::CsvError`]: the CSV itself is garbled (bad quoting,
//!   invalid UTF-8); the `csv` reader's error is kept for its position
//!
//! Both parse variants are reported once, at load time.
//!
//! ```rust
//! use geoview::store::{LoadOptions, Table};
//!
//! let csv = "lat,lng\n-34.6,-58.4\n-31.4,-64.2\n";
//! let table = Table::from_bytes(csv.as_bytes(), &LoadOptions::default())?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.lookup(2)?.get("lat"), Some("-31.4"));
//! # Ok::<(), geoview::store::StoreError>(())
//! ```

mod error;
mod source;
mod table;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use source::{ResolvedSource, TableSource, DEFAULT_SOURCE};
pub use table::{LoadOptions, RecordId, Row, Table};
