use serde::{Deserialize, Serialize};

/// Reference point latitude
pub const REFERENCE_LAT: &str = "PP_latitud";
/// Reference point longitude
pub const REFERENCE_LNG: &str = "PP_longitud";
/// Geocoded latitude
pub const GEOCODED_LAT: &str = "lat";
/// Geocoded longitude
pub const GEOCODED_LNG: &str = "lng";
/// Reference point method (compared against `EXACT`)
pub const METHOD: &str = "PP_method";
/// Geocoder quality score
pub const SCORE: &str = "score";
/// Reference point discrepancy
pub const DIFFERENCE: &str = "PP_diferencia";

/// Logical fields the viewer interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Reference point latitude
    ReferenceLat,
    /// Reference point longitude
    ReferenceLng,
    /// Geocoded latitude
    GeocodedLat,
    /// Geocoded longitude
    GeocodedLng,
    /// Reference method
    Method,
    /// Geocoder score
    Score,
    /// Reference discrepancy
    Difference,
}

impl Field {
    /// The four coordinate fields.
    pub const COORDINATES: [Field; 4] = [
        Field::ReferenceLat,
        Field::ReferenceLng,
        Field::GeocodedLat,
        Field::GeocodedLng,
    ];

    /// Every interpreted field, in required-check order.
    pub const ALL: [Field; 7] = [
        Field::ReferenceLat,
        Field::ReferenceLng,
        Field::GeocodedLat,
        Field::GeocodedLng,
        Field::Method,
        Field::Score,
        Field::Difference,
    ];
}

/// Mapping from logical fields to header names.
///
/// Deserializes from a `[columns]` TOML table; unset keys keep the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    /// Header of the reference latitude column
    pub reference_lat: String,
    /// Header of the reference longitude column
    pub reference_lng: String,
    /// Header of the geocoded latitude column
    pub geocoded_lat: String,
    /// Header of the geocoded longitude column
    pub geocoded_lng: String,
    /// Header of the method column
    pub method: String,
    /// Header of the score column
    pub score: String,
    /// Header of the difference column
    pub difference: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            reference_lat: REFERENCE_LAT.to_string(),
            reference_lng: REFERENCE_LNG.to_string(),
            geocoded_lat: GEOCODED_LAT.to_string(),
            geocoded_lng: GEOCODED_LNG.to_string(),
            method: METHOD.to_string(),
            score: SCORE.to_string(),
            difference: DIFFERENCE.to_string(),
        }
    }
}

impl ColumnMap {
    /// Header name for a logical field.
    pub fn name(&self, field: Field) -> &str {
        match field {
            Field::ReferenceLat => &self.reference_lat,
            Field::ReferenceLng => &self.reference_lng,
            Field::GeocodedLat => &self.geocoded_lat,
            Field::GeocodedLng => &self.geocoded_lng,
            Field::Method => &self.method,
            Field::Score => &self.score,
            Field::Difference => &self.difference,
        }
    }
}
