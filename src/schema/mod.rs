//! # Address Table Schema
//!
//! An address table is only viewable when its header carries the columns the
//! marker policy reads. This module names those logical fields, maps them to
//! physical header names, and reports which ones a table lacks.
//!
//! ## Default Columns
//!
//! | Field | Default header | Meaning |
//! |-------|----------------|---------|
//! | reference latitude | `PP_latitud` | Originally provided latitude |
//! | reference longitude | `PP_longitud` | Originally provided longitude |
//! | geocoded latitude | `lat` | Latitude produced by the geocoder |
//! | geocoded longitude | `lng` | Longitude produced by the geocoder |
//! | method | `PP_method` | How the reference point was determined |
//! | score | `score` | Geocoder quality indicator |
//! | difference | `PP_diferencia` | Discrepancy associated with the reference point |
//!
//! Any other column is carried through untouched for display.

/// Default header names.
pub mod columns;
mod validation;


pub use columns::{ColumnMap, Field};
pub use validation::{missing_columns, validate_headers, RequiredColumns, SchemaError};
