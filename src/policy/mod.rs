//! # Marker Policy
//!
//! Turns one record's parsed fields into a [`MarkerDecision`]:
//!
//! 1. The reference point is usable only when both coordinates parsed.
//! 2. It is shown only when usable, the method equals `EXACT`
//!    (case-insensitive) and `difference < 100`.
//! 3. The geocoded marker is positive when `score > 0.5`, neutral otherwise.
//! 4. The center is the midpoint when the reference is usable, else the
//!    geocoded point.
//! 5. Line and bounds-fit follow the reference marker.
//!
//! Comparisons against missing values are false, never errors.
//!
//! ```rust
//! use geoview::normalize::NumericCell;
//! use geoview::policy::{decide, MarkerColor, PolicyConfig, RecordFields};
//!
//! let fields = RecordFields {
//!     reference_lat: NumericCell::Value(-34.60),
//!     reference_lng: NumericCell::Value(-58.38),
//!     geocoded_lat: NumericCell::Value(-34.61),
//!     geocoded_lng: NumericCell::Value(-58.39),
//!     method: Some("exact".to_string()),
//!     difference: NumericCell::Value(50.0),
//!     score: NumericCell::Value(0.8),
//! };
//! let decision = decide(&fields, &PolicyConfig::default())?;
//! assert!(decision.show_reference);
//! assert_eq!(decision.geo_color, MarkerColor::Positive);
//! # Ok::<(), geoview::policy::PolicyError>(())
//! ```

mod config;
mod decision;
mod fields;


pub use config::{CenterMode, PolicyConfig, ReferencePolicy, Thresholds};
pub use decision::{
    decide, geocoded_color, reference_condition, MarkerColor, MarkerDecision, Point,
};
pub use fields::{LatLng, RecordFields};

/// Errors that can occur while deciding markers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// A mandatory point lacks usable coordinates
    #[error("Record has no valid {point} coordinates")]
    CoordinateMissing {
        /// The point that is missing
        point: Point,
    },
}
