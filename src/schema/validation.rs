use serde::{Deserialize, Serialize};

use super::columns::{ColumnMap, Field};

/// Which set of columns a table must carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredColumns {
    /// Only the four coordinate columns
    Coordinates,
    /// Coordinates plus method, score and difference
    #[default]
    Full,
}

impl RequiredColumns {
    /// Logical fields in the order they are checked and reported.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            RequiredColumns::Coordinates => &Field::COORDINATES,
            RequiredColumns::Full => &Field::ALL,
        }
    }

    /// Header names required under `columns`, in declared order.
    pub fn names<'a>(&self, columns: &'a ColumnMap) -> Vec<&'a str> {
        self.fields().iter().map(|f| columns.name(*f)).collect()
    }
}

/// Returns the required names absent from `headers`, in the order `required`
/// declares them. An empty result means the table is accepted.
pub fn missing_columns<H, R>(headers: &[H], required: &[R]) -> Vec<String>
where
    H: AsRef<str>,
    R: AsRef<str>,
{
    required
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !headers.iter().any(|h| h.as_ref().trim() == *name))
        .map(str::to_string)
        .collect()
}

/// Checks `headers` against the required set, failing with every missing name.
pub fn validate_headers<H: AsRef<str>>(
    headers: &[H],
    required: RequiredColumns,
    columns: &ColumnMap,
) -> Result<(), SchemaError> {
    let missing = missing_columns(headers, &required.names(columns));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns(missing))
    }
}

/// Errors that can occur during schema validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// One or more required columns are missing from the header
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
