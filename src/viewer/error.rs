use std::fmt;
use std::path::PathBuf;

use crate::policy::Point;
use crate::render::RenderError;
use crate::store::{RecordId, StoreError};

/// A selected record lacks usable mandatory coordinates.
///
/// Carried as a warning on a render outcome: the raw row is still shown, only
/// the map is withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMissing {
    /// The record
    pub id: RecordId,
    /// Which point is missing
    pub point: Point,
}

impl fmt::Display for CoordinateMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record {} has no valid {} coordinates",
            self.id, self.point
        )
    }
}

/// Errors that end a render pass (never the session)
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// No file was supplied and the default path does not exist
    #[error("No data source: {} not found and no file supplied", .0.display())]
    SourceUnavailable(PathBuf),

    /// The supplied file does not exist
    #[error("Supplied file not found: {}", .0.display())]
    SuppliedMissing(PathBuf),

    /// The table lacks required columns
    #[error("Missing required columns: {}", .missing.join(", "))]
    SchemaInvalid {
        /// Missing header names in declared order
        missing: Vec<String>,
    },

    /// The selected record has no usable mandatory coordinates
    #[error("{0}")]
    CoordinateMissing(CoordinateMissing),

    /// Loading or lookup error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Rendering error
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<CoordinateMissing> for ViewError {
    fn from(warning: CoordinateMissing) -> Self {
        ViewError::CoordinateMissing(warning)
    }
}
