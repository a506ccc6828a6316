use serde::{Deserialize, Serialize};

/// What an unusable reference point does to a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferencePolicy {
    /// Ignore the reference point and show only the geocoded one
    #[default]
    Degrade,
    /// Reject the record when a reference cell is present but unparseable,
    /// or only one of the pair is filled; a fully empty pair is ignored
    RejectInvalid,
    /// Reject the record whenever the reference point is unusable
    RequireBoth,
}

/// How the map center is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterMode {
    /// Midpoint whenever the reference point is usable, shown or not
    #[default]
    UsableReference,
    /// Midpoint only when the reference marker is shown
    ShownPoints,
}

/// Display thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Method value that qualifies a reference point (case-insensitive)
    pub exact_method: String,
    /// Reference shown only when `difference` is strictly below this
    pub max_difference: f64,
    /// Geocoded marker is positive only when `score` is strictly above this
    pub min_score: f64,
    /// Ignore whitespace around the method value before comparing
    pub trim_method: bool,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            exact_method: "EXACT".to_string(),
            max_difference: 100.0,
            min_score: 0.5,
            trim_method: false,
        }
    }
}

/// Complete marker policy configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyConfig {
    /// Handling of unusable reference points
    pub reference: ReferencePolicy,
    /// Map center rule
    pub center: CenterMode,
    /// Display thresholds
    pub thresholds: Thresholds,
}
