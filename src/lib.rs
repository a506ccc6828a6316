//! # geoview - Record-by-record Geocoding Review
//!
//! `geoview` loads a table of geocoded addresses and shows one record at a
//! time on a map: the point produced by the geocoder, and, when it is
//! trustworthy, the originally provided reference point next to it.
//!
//! ## Key Features
//!
//! - **Tolerant numeric parsing**: decimal commas, stray spaces and garbage
//!   cells are normalized at the boundary; garbage becomes "missing", never an
//!   error.
//!
//! - **Explicit marker policy**: the reference point is drawn only for exact
//!   matches with a small discrepancy; the geocoded marker color follows the
//!   geocoder score.
//!
//! - **Standalone output**: each record renders to a self-contained Leaflet
//!   page, or to JSON for other front ends.
//!
//! - **Whole-table validation**: one report listing what will and will not
//!   render before browsing starts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geoview::store::{LoadOptions, TableSource};
//! use geoview::viewer::{Viewer, ViewerConfig};
//!
//! let source = TableSource::new(None);
//! let viewer = Viewer::open(&source, &LoadOptions::default(), ViewerConfig::default())?;
//!
//! let outcome = viewer.render(1)?;
//! if let Some(page) = viewer.page(&outcome)? {
//!     std::fs::write("map.html", page)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`normalize`]: raw cell text to an optional finite number
//! - [`schema`]: required columns and header-name mapping
//! - [`store`]: CSV loading and 1-based record lookup
//! - [`policy`]: marker, line, bounds and center decisions
//! - [`render`]: map layout, JSON and HTML output
//! - [`viewer`]: one render pass per selected record
//! - [`validator`]: whole-table quality report
//!
//! ## Table Format
//!
//! | Column | Required | Description |
//! |--------|----------|-------------|
//! | PP_latitud | Yes | Reference latitude |
//! | PP_longitud | Yes | Reference longitude |
//! | lat | Yes | Geocoded latitude |
//! | lng | Yes | Geocoded longitude |
//! | PP_method | Full schema | How the reference was determined |
//! | score | Full schema | Geocoder score |
//! | PP_diferencia | Full schema | Reference discrepancy |
//!
//! Header names can be remapped with [`schema::ColumnMap`]; every other
//! column is kept and displayed as-is.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod normalize;
pub mod policy;
pub mod render;
pub mod schema;
pub mod store;
pub mod validator;
pub mod viewer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::normalize::{normalize, NumericCell};
    pub use crate::policy::{
        decide, CenterMode, LatLng, MarkerColor, MarkerDecision, PolicyConfig, PolicyError,
        RecordFields, ReferencePolicy, Thresholds,
    };
    pub use crate::render::{render_page, MapOptions, MapView, Palette, RenderError};
    pub use crate::schema::{ColumnMap, RequiredColumns, SchemaError};
    pub use crate::store::{LoadOptions, RecordId, Row, StoreError, Table, TableSource};
    pub use crate::validator::{validate_file, validate_table, ValidationReport};
    pub use crate::viewer::{CoordinateMissing, RenderOutcome, ViewError, Viewer, ViewerConfig};
}
