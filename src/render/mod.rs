//! # Map Renderer
//!
//! Pure drawing over already-decided inputs. A [`MapView`] holds the center,
//! zoom, numbered markers, optional connecting line and optional bounds-fit;
//! it serializes to JSON and renders to a standalone Leaflet page.
//!
//! Markers are filled circular badges (28px, white bold number, black
//! border) colored through a [`Palette`]: marker 1 is the geocoded point,
//! marker 2 the reference point.

mod html;
mod view;

#[cfg(test)]
mod tests;

pub use html::render_page;
pub use view::{
    Bounds, MapOptions, MapView, MarkerSpec, Palette, Polyline, Tiles, DEFAULT_ATTRIBUTION,
    DEFAULT_HEIGHT, DEFAULT_TILE_URL, DEFAULT_ZOOM,
};

/// Errors that can occur while rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
