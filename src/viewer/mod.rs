//! # Viewer
//!
//! One render pass per selection: look the record up in the loaded [`Table`],
//! parse its fields, decide markers, lay out the map. The table is validated
//! once when the viewer is built and is never mutated afterwards.
//!
//! ```rust
//! use geoview::store::{LoadOptions, Table};
//! use geoview::viewer::{Viewer, ViewerConfig};
//!
//! let csv = "PP_latitud,PP_longitud,lat,lng,PP_method,score,PP_diferencia\n\
//!            -34.60,-58.38,-34.61,-58.39,EXACT,0.8,50\n";
//! let table = Table::from_bytes(csv.as_bytes(), &LoadOptions::default())?;
//! let viewer = Viewer::new(table, ViewerConfig::default())?;
//!
//! let outcome = viewer.render(1)?;
//! assert_eq!(outcome.map.unwrap().markers.len(), 2);
//! # Ok::<(), geoview::viewer::ViewError>(())
//! ```

mod error;

#[cfg(test)]
mod tests;

use log::{info, warn};

pub use error::{CoordinateMissing, ViewError};

use crate::policy::{decide, MarkerDecision, PolicyConfig, PolicyError, Point, RecordFields};
use crate::render::{render_page, MapOptions, MapView, RenderError};
use crate::schema::{validate_headers, ColumnMap, RequiredColumns, SchemaError};
use crate::store::{LoadOptions, RecordId, StoreError, Table, TableSource};

/// Everything a render pass is configured by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerConfig {
    /// Header names of the interpreted fields
    pub columns: ColumnMap,
    /// Required column set
    pub required: RequiredColumns,
    /// Marker policy
    pub policy: PolicyConfig,
    /// Map rendering
    pub map: MapOptions,
}

/// Result of rendering one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// Record identifier
    pub id: RecordId,
    /// Raw `(header, value)` pairs, always present
    pub row: Vec<(String, String)>,
    /// Parsed fields
    pub fields: RecordFields,
    /// Marker decision, absent when the record was rejected
    pub decision: Option<MarkerDecision>,
    /// Map, absent when the record was rejected
    pub map: Option<MapView>,
    /// Why the map is absent
    pub warning: Option<CoordinateMissing>,
}

impl RenderOutcome {
    /// The map, or the coordinate warning as an error.
    pub fn into_map(self) -> Result<MapView, ViewError> {
        let id = self.id;
        let warning = self.warning;
        self.map.ok_or_else(|| {
            warning
                .unwrap_or(CoordinateMissing {
                    id,
                    point: Point::Geocoded,
                })
                .into()
        })
    }
}

/// A validated table plus the configuration to view it.
#[derive(Debug, Clone)]
pub struct Viewer {
    table: Table,
    config: ViewerConfig,
}

impl Viewer {
    /// Validate `table` against the required columns.
    pub fn new(table: Table, config: ViewerConfig) -> Result<Self, ViewError> {
        validate_headers(table.headers(), config.required, &config.columns).map_err(
            |e| match e {
                SchemaError::MissingColumns(missing) => ViewError::SchemaInvalid { missing },
            },
        )?;
        info!(
            "Table {} ready: {} records, {} columns",
            table.label(),
            table.len(),
            table.headers().len()
        );
        Ok(Self { table, config })
    }

    /// Resolve a source, load it and validate it.
    pub fn open(
        source: &TableSource,
        options: &LoadOptions,
        config: ViewerConfig,
    ) -> Result<Self, ViewError> {
        let (_, table) = source.load(options).map_err(|e| match e {
            StoreError::NotFound(path) if source.supplied.is_some() => {
                ViewError::SuppliedMissing(path)
            }
            StoreError::NotFound(path) => ViewError::SourceUnavailable(path),
            other => ViewError::Store(other),
        })?;
        Self::new(table, config)
    }

    /// The loaded table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The active configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Number of records; valid selections are `1..=record_count()`.
    pub fn record_count(&self) -> usize {
        self.table.len()
    }

    /// Render one record by its user-facing number.
    ///
    /// A record without usable mandatory coordinates is not an error here:
    /// the outcome carries the raw row and a warning, and no map.
    pub fn render(&self, requested: usize) -> Result<RenderOutcome, ViewError> {
        let row = self.table.lookup(requested)?;
        let id = row.id();
        let fields = RecordFields::from_row(&row, &self.config.columns);

        let (decision, map, warning) = match decide(&fields, &self.config.policy) {
            Ok(decision) => {
                let map = MapView::from_decision(
                    &decision,
                    &fields,
                    &self.config.columns,
                    &self.config.map,
                );
                (Some(decision), Some(map), None)
            }
            Err(PolicyError::CoordinateMissing { point }) => {
                let warning = CoordinateMissing { id, point };
                warn!("{}", warning);
                (None, None, Some(warning))
            }
        };

        Ok(RenderOutcome {
            id,
            row: row.to_pairs(),
            fields,
            decision,
            map,
            warning,
        })
    }

    /// Caption shown above the map.
    pub fn caption(&self, id: RecordId) -> String {
        format!("Record {} of {}", id, self.record_count())
    }

    /// Standalone HTML page for an outcome that has a map.
    pub fn page(&self, outcome: &RenderOutcome) -> Result<Option<String>, RenderError> {
        outcome
            .map
            .as_ref()
            .map(|map| render_page(map, &self.caption(outcome.id), &outcome.row, &self.config.map))
            .transpose()
    }
}
