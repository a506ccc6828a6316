use std::path::{Path, PathBuf};

use log::info;

use super::{LoadOptions, StoreError, Table};

/// Default file looked up in the working directory when nothing is supplied.
pub const DEFAULT_SOURCE: &str = "direcciones_X.csv";

/// Where a table comes from: an explicitly supplied file, else a default path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    /// File supplied by the user; takes precedence when set
    pub supplied: Option<PathBuf>,
    /// Fallback path
    pub default_path: PathBuf,
}

/// The file a [`TableSource`] settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// The user-supplied file
    Supplied(PathBuf),
    /// The default path
    Default(PathBuf),
}

impl ResolvedSource {
    /// Path to read.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedSource::Supplied(p) | ResolvedSource::Default(p) => p,
        }
    }

    /// Short label for display.
    pub fn describe(&self) -> String {
        match self {
            ResolvedSource::Supplied(p) => format!("Supplied file ({})", p.display()),
            ResolvedSource::Default(p) => format!("Default file ({})", p.display()),
        }
    }
}

impl Default for TableSource {
    fn default() -> Self {
        Self {
            supplied: None,
            default_path: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl TableSource {
    /// Source with a supplied file and the stock default path.
    pub fn new(supplied: Option<PathBuf>) -> Self {
        Self {
            supplied,
            ..Default::default()
        }
    }

    /// Replace the default path.
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    /// Pick the file to load.
    ///
    /// A supplied file always wins, even when missing, so the user sees an
    /// error about the file they asked for. Without one, the default path must
    /// exist.
    pub fn resolve(&self) -> Result<ResolvedSource, StoreError> {
        if let Some(path) = &self.supplied {
            if !path.exists() {
                return Err(StoreError::NotFound(path.clone()));
            }
            return Ok(ResolvedSource::Supplied(path.clone()));
        }
        if self.default_path.exists() {
            Ok(ResolvedSource::Default(self.default_path.clone()))
        } else {
            Err(StoreError::NotFound(self.default_path.clone()))
        }
    }

    /// Resolve and load in one step.
    pub fn load(&self, options: &LoadOptions) -> Result<(ResolvedSource, Table), StoreError> {
        let resolved = self.resolve()?;
        info!("Data source: {}", resolved.describe());
        let table = Table::from_path(resolved.path(), options)?;
        Ok((resolved, table))
    }
}
