use serde::{Deserialize, Serialize};

use crate::normalize::NumericCell;
use crate::schema::{ColumnMap, Field};
use crate::store::Row;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl LatLng {
    /// Create a point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Arithmetic midpoint of two points; finite for any finite inputs.
    pub fn midpoint(&self, other: &LatLng) -> LatLng {
        LatLng {
            lat: self.lat / 2.0 + other.lat / 2.0,
            lng: self.lng / 2.0 + other.lng / 2.0,
        }
    }

    fn from_cells(lat: &NumericCell, lng: &NumericCell) -> Option<Self> {
        Some(Self::new(lat.value()?, lng.value()?))
    }
}

/// The interpreted fields of one record, parsed once at the boundary.
///
/// Absent columns read as blank cells, so a table validated with only the
/// coordinate set still yields a usable value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    /// Reference latitude
    pub reference_lat: NumericCell,
    /// Reference longitude
    pub reference_lng: NumericCell,
    /// Geocoded latitude
    pub geocoded_lat: NumericCell,
    /// Geocoded longitude
    pub geocoded_lng: NumericCell,
    /// Reference method, raw text
    pub method: Option<String>,
    /// Reference discrepancy
    pub difference: NumericCell,
    /// Geocoder score
    pub score: NumericCell,
}

impl RecordFields {
    /// Parse the interpreted fields out of a table row.
    pub fn from_row(row: &Row<'_>, columns: &ColumnMap) -> Self {
        let cell = |field: Field| NumericCell::parse_opt(row.get(columns.name(field)));
        Self {
            reference_lat: cell(Field::ReferenceLat),
            reference_lng: cell(Field::ReferenceLng),
            geocoded_lat: cell(Field::GeocodedLat),
            geocoded_lng: cell(Field::GeocodedLng),
            method: row.get(columns.name(Field::Method)).map(str::to_string),
            difference: cell(Field::Difference),
            score: cell(Field::Score),
        }
    }

    /// Reference point, when both coordinates parsed.
    pub fn reference(&self) -> Option<LatLng> {
        LatLng::from_cells(&self.reference_lat, &self.reference_lng)
    }

    /// Geocoded point, when both coordinates parsed.
    pub fn geocoded(&self) -> Option<LatLng> {
        LatLng::from_cells(&self.geocoded_lat, &self.geocoded_lng)
    }

    /// True when the reference pair is unusable but not entirely empty:
    /// a garbled cell, or only one of the two filled in.
    pub fn reference_is_malformed(&self) -> bool {
        self.reference().is_none()
            && !(self.reference_lat.is_blank() && self.reference_lng.is_blank())
    }

    /// Case-insensitive method match. Surrounding whitespace only matches
    /// when `trim` is set.
    pub fn method_is(&self, expected: &str, trim: bool) -> bool {
        self.method.as_deref().is_some_and(|m| {
            let m = if trim { m.trim() } else { m };
            m.to_uppercase() == expected.to_uppercase()
        })
    }
}
