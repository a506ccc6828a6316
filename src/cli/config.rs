//! TOML configuration file support.
//!
//! Instead of passing many CLI flags, users can keep settings in a config file:
//!
//! ```toml
//! # geoview.toml
//! [source]
//! default_path = "direcciones_X.csv"
//! delimiter = ";"
//!
//! [columns]
//! geocoded_lat = "latitude"
//! geocoded_lng = "longitude"
//!
//! [policy]
//! reference = "reject-invalid"
//! required = "full"
//! center = "usable-reference"
//! exact_method = "EXACT"
//! max_difference = 100.0
//! min_score = 0.5
//! trim_method = false
//!
//! [map]
//! zoom = 15
//! height = 520
//! ```
//!
//! Every key is optional; command-line flags win over file values.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use geoview::policy::{CenterMode, ReferencePolicy};
use geoview::render::Palette;
use geoview::schema::{ColumnMap, RequiredColumns};
use geoview::store::{LoadOptions, DEFAULT_SOURCE};
use geoview::viewer::ViewerConfig;

use super::PolicyArgs;

/// Root configuration structure for geoview.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where tables come from and how they are parsed.
    #[serde(default)]
    pub source: SourceConfig,

    /// Header names of the interpreted columns.
    #[serde(default)]
    pub columns: ColumnMap,

    /// Marker policy settings.
    #[serde(default)]
    pub policy: PolicySection,

    /// Map rendering settings.
    #[serde(default)]
    pub map: MapSection,
}

/// `[source]` section.
#[derive(Debug, Default, Deserialize)]
pub struct SourceConfig {
    /// File loaded when none is supplied.
    pub default_path: Option<PathBuf>,

    /// Single-character field delimiter.
    pub delimiter: Option<char>,

    /// Trim whitespace around every field, not just headers.
    pub trim_fields: Option<bool>,
}

/// `[policy]` section.
#[derive(Debug, Default, Deserialize)]
pub struct PolicySection {
    /// Handling of unusable reference points.
    pub reference: Option<ReferencePolicy>,

    /// Required column set.
    pub required: Option<RequiredColumns>,

    /// Map center rule.
    pub center: Option<CenterMode>,

    /// Method value that qualifies a reference point.
    pub exact_method: Option<String>,

    /// Reference shown only below this difference.
    pub max_difference: Option<f64>,

    /// Geocoded marker positive only above this score.
    pub min_score: Option<f64>,

    /// Ignore whitespace around the method value.
    pub trim_method: Option<bool>,
}

/// `[map]` section.
#[derive(Debug, Default, Deserialize)]
pub struct MapSection {
    /// Initial zoom level.
    pub zoom: Option<u8>,

    /// Map height in pixels.
    pub height: Option<u32>,

    /// Tile URL template.
    pub tile_url: Option<String>,

    /// Tile attribution.
    pub attribution: Option<String>,

    /// Marker colors.
    pub palette: Option<Palette>,
}

/// Effective settings after merging file values and flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Default table path
    pub default_path: PathBuf,
    /// CSV parsing options
    pub load: LoadOptions,
    /// Viewer configuration
    pub viewer: ViewerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file named by `--config`, or defaults when none was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// CSV options from the `[source]` section.
    pub fn load_options(&self) -> Result<LoadOptions> {
        let mut options = LoadOptions::default();
        if let Some(delimiter) = self.source.delimiter {
            if !delimiter.is_ascii() {
                bail!("Delimiter must be a single ASCII character, got {:?}", delimiter);
            }
            options.delimiter = delimiter as u8;
        }
        if let Some(trim) = self.source.trim_fields {
            options.trim_fields = trim;
        }
        Ok(options)
    }

    /// Merge file values with command-line flags.
    pub fn settings(self, args: &PolicyArgs) -> Result<Settings> {
        let load = self.load_options()?;
        let mut viewer = ViewerConfig {
            columns: self.columns,
            ..Default::default()
        };

        let policy = self.policy;
        if let Some(reference) = policy.reference {
            viewer.policy.reference = reference;
        }
        if let Some(required) = policy.required {
            viewer.required = required;
        }
        if let Some(center) = policy.center {
            viewer.policy.center = center;
        }
        if let Some(method) = policy.exact_method {
            viewer.policy.thresholds.exact_method = method;
        }
        if let Some(max_difference) = policy.max_difference {
            viewer.policy.thresholds.max_difference = max_difference;
        }
        if let Some(min_score) = policy.min_score {
            viewer.policy.thresholds.min_score = min_score;
        }
        if let Some(trim_method) = policy.trim_method {
            viewer.policy.thresholds.trim_method = trim_method;
        }

        let map = self.map;
        if let Some(zoom) = map.zoom {
            viewer.map.zoom = zoom;
        }
        if let Some(height) = map.height {
            viewer.map.height = height;
        }
        if let Some(tile_url) = map.tile_url {
            viewer.map.tile_url = tile_url;
        }
        if let Some(attribution) = map.attribution {
            viewer.map.attribution = attribution;
        }
        if let Some(palette) = map.palette {
            viewer.map.palette = palette;
        }

        // Flags override the file
        if let Some(reference) = args.reference_policy {
            viewer.policy.reference = reference.into();
        }
        if let Some(required) = args.required {
            viewer.required = required.into();
        }

        Ok(Settings {
            default_path: self
                .source
                .default_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            load,
            viewer,
        })
    }
}
