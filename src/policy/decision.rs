use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    CenterMode, LatLng, PolicyConfig, PolicyError, RecordFields, ReferencePolicy,
};

/// Which of the two candidate points a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Point {
    /// The geocoder's output
    Geocoded,
    /// The originally provided coordinates
    Reference,
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Point::Geocoded => write!(f, "geocoded"),
            Point::Reference => write!(f, "reference"),
        }
    }
}

/// Semantic marker color; the renderer maps it to a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    /// Good geocoder score
    Positive,
    /// Score at or below the threshold, or missing
    Neutral,
    /// A reference point that passed the display condition
    Highlight,
}

/// Everything the renderer needs to know about one record, decided fresh on
/// each selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDecision {
    /// Geocoded point (always present in a decision)
    pub geocoded: LatLng,
    /// Usable reference point, whether shown or not
    pub reference: Option<LatLng>,
    /// Reference marker is drawn
    pub show_reference: bool,
    /// Color of the reference marker
    pub reference_color: MarkerColor,
    /// Color of the geocoded marker
    pub geo_color: MarkerColor,
    /// Connecting line between the two markers is drawn
    pub draw_line: bool,
    /// Viewport is fit to both markers
    pub fit_bounds: bool,
    /// Map center
    pub center: LatLng,
}

impl MarkerDecision {
    /// Number of markers that will be drawn.
    pub fn marker_count(&self) -> usize {
        if self.show_reference {
            2
        } else {
            1
        }
    }
}

/// Reference display condition: usable reference, exact method, and a
/// difference strictly below the threshold. Missing values make it false.
pub fn reference_condition(fields: &RecordFields, config: &PolicyConfig) -> bool {
    let t = &config.thresholds;
    fields.reference().is_some()
        && fields.method_is(&t.exact_method, t.trim_method)
        && fields.difference.lt(t.max_difference)
}

/// Geocoded marker color from the score threshold.
pub fn geocoded_color(fields: &RecordFields, config: &PolicyConfig) -> MarkerColor {
    if fields.score.gt(config.thresholds.min_score) {
        MarkerColor::Positive
    } else {
        MarkerColor::Neutral
    }
}

/// Decide markers, line, bounds and center for one record.
///
/// Fails with [`PolicyError::CoordinateMissing`] when the geocoded point is
/// unusable, or when the reference point is unusable and the configured
/// [`ReferencePolicy`] rejects such records.
pub fn decide(fields: &RecordFields, config: &PolicyConfig) -> Result<MarkerDecision, PolicyError> {
    let geocoded = fields.geocoded().ok_or(PolicyError::CoordinateMissing {
        point: Point::Geocoded,
    })?;

    let reference = fields.reference();
    let rejected = match config.reference {
        ReferencePolicy::Degrade => false,
        ReferencePolicy::RejectInvalid => fields.reference_is_malformed(),
        ReferencePolicy::RequireBoth => reference.is_none(),
    };
    if rejected {
        return Err(PolicyError::CoordinateMissing {
            point: Point::Reference,
        });
    }

    let show_reference = reference_condition(fields, config);
    let center = match (reference, config.center) {
        (Some(r), CenterMode::UsableReference) => r.midpoint(&geocoded),
        (Some(r), CenterMode::ShownPoints) if show_reference => r.midpoint(&geocoded),
        _ => geocoded,
    };

    let decision = MarkerDecision {
        geocoded,
        reference,
        show_reference,
        reference_color: MarkerColor::Highlight,
        geo_color: geocoded_color(fields, config),
        draw_line: show_reference,
        fit_bounds: show_reference,
        center,
    };
    debug!(
        "Decided {} marker(s), geocoded color {:?}",
        decision.marker_count(),
        decision.geo_color
    );
    Ok(decision)
}
