use serde::{Deserialize, Serialize};

use crate::policy::{LatLng, MarkerColor, MarkerDecision, RecordFields};
use crate::schema::{ColumnMap, Field};

/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 15;
/// Default map height in pixels
pub const DEFAULT_HEIGHT: u32 = 520;
/// Default OpenStreetMap tile template
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Attribution shown for the default tiles
pub const DEFAULT_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Concrete CSS colors for each semantic marker color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Good geocoder score
    pub positive: String,
    /// Low or missing score
    pub neutral: String,
    /// Displayed reference point
    pub highlight: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: "green".to_string(),
            neutral: "gray".to_string(),
            highlight: "green".to_string(),
        }
    }
}

impl Palette {
    /// CSS color for a marker color.
    pub fn fill(&self, color: MarkerColor) -> &str {
        match color {
            MarkerColor::Positive => &self.positive,
            MarkerColor::Neutral => &self.neutral,
            MarkerColor::Highlight => &self.highlight,
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
    /// Initial zoom level
    pub zoom: u8,
    /// Map height in pixels
    pub height: u32,
    /// Tile URL template
    pub tile_url: String,
    /// Tile attribution (HTML allowed, as Leaflet expects)
    pub attribution: String,
    /// Marker colors
    pub palette: Palette,
    /// Page title
    pub title: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            height: DEFAULT_HEIGHT,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            palette: Palette::default(),
            title: "Geocoding review".to_string(),
        }
    }
}

/// A numbered marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Position
    pub position: LatLng,
    /// Number drawn inside the badge
    pub number: u8,
    /// Semantic color
    pub color: MarkerColor,
    /// Concrete CSS fill color
    pub fill: String,
    /// Hover text
    pub tooltip: String,
    /// Click text
    pub popup: String,
}

/// A straight line between points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertices
    pub points: Vec<LatLng>,
    /// Stroke width in pixels
    pub weight: u8,
    /// Stroke opacity
    pub opacity: f32,
}

/// Axis-aligned viewport bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// South-west corner
    pub south_west: LatLng,
    /// North-east corner
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest bounds containing both points.
    pub fn enclosing(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }
}

/// Tile layer settings carried with the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiles {
    /// URL template
    pub url: String,
    /// Attribution
    pub attribution: String,
}

/// A fully decided map, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Initial center
    pub center: LatLng,
    /// Initial zoom
    pub zoom: u8,
    /// Markers in draw order (reference first, geocoded on top)
    pub markers: Vec<MarkerSpec>,
    /// Optional connecting line
    pub line: Option<Polyline>,
    /// Optional viewport fit
    pub bounds: Option<Bounds>,
    /// Tile layer
    pub tiles: Tiles,
}

impl MapView {
    /// Lay out the map for an already-made decision.
    pub fn from_decision(
        decision: &MarkerDecision,
        fields: &RecordFields,
        columns: &ColumnMap,
        options: &MapOptions,
    ) -> Self {
        let geo = decision.geocoded;
        let mut markers = Vec::with_capacity(2);

        let shown_reference = decision.reference.filter(|_| decision.show_reference);
        if let Some(reference) = shown_reference {
            markers.push(MarkerSpec {
                position: reference,
                number: 2,
                color: decision.reference_color,
                fill: options.palette.fill(decision.reference_color).to_string(),
                tooltip: "PP point".to_string(),
                popup: format!(
                    "PP: ({:.6}, {:.6}) | {}={} | {}={}",
                    reference.lat,
                    reference.lng,
                    columns.name(Field::Method),
                    fields.method.as_deref().unwrap_or("nan"),
                    columns.name(Field::Difference),
                    fields.difference,
                ),
            });
        }

        markers.push(MarkerSpec {
            position: geo,
            number: 1,
            color: decision.geo_color,
            fill: options.palette.fill(decision.geo_color).to_string(),
            tooltip: "Geocoded point".to_string(),
            popup: format!(
                "Geocoded: ({:.6}, {:.6}) | {}={}",
                geo.lat,
                geo.lng,
                columns.name(Field::Score),
                fields.score,
            ),
        });

        let line = shown_reference
            .filter(|_| decision.draw_line)
            .map(|reference| Polyline {
                points: vec![reference, geo],
                weight: 3,
                opacity: 0.8,
            });
        let bounds = shown_reference
            .filter(|_| decision.fit_bounds)
            .map(|reference| Bounds::enclosing(reference, geo));

        Self {
            center: decision.center,
            zoom: options.zoom,
            markers,
            line,
            bounds,
            tiles: Tiles {
                url: options.tile_url.clone(),
                attribution: options.attribution.clone(),
            },
        }
    }

    /// Marker with the given number, if drawn.
    pub fn marker(&self, number: u8) -> Option<&MarkerSpec> {
        self.markers.iter().find(|m| m.number == number)
    }

    /// JSON form of the view.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
