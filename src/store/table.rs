use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::NonZeroUsize;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::StoreError;

/// Stable 1-based record identifier, assigned in source order at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(NonZeroUsize);

impl RecordId {
    /// The first record.
    pub const FIRST: RecordId = RecordId(NonZeroUsize::MIN);

    /// Build an identifier; `0` has no record.
    pub fn new(id: usize) -> Option<Self> {
        NonZeroUsize::new(id).map(RecordId)
    }

    fn from_position(position: usize) -> Self {
        RecordId(NonZeroUsize::MIN.saturating_add(position))
    }

    /// Numeric value of the identifier.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn position(&self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSV loading options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Trim whitespace around every cell, not just headers
    pub trim_fields: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim_fields: false,
        }
    }
}

/// One row of the source table; cells are padded to the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    id: RecordId,
    values: Vec<String>,
}

/// An immutable, loaded address table.
///
/// Built once per load and then only read; every view operation takes it by
/// reference.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    records: Vec<Record>,
    label: String,
}

impl Table {
    /// Load a table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            _ => StoreError::IoError(e),
        })?;
        let mut table = Self::from_reader(BufReader::new(file), options)?;
        table.label = path.display().to_string();
        Ok(table)
    }

    /// Load a table from in-memory bytes, e.g. an uploaded file.
    pub fn from_bytes(bytes: &[u8], options: &LoadOptions) -> Result<Self, StoreError> {
        Self::from_reader(bytes, options)
    }

    /// Load a table from any reader producing CSV with a header row.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, StoreError> {
        let trim = if options.trim_fields {
            csv::Trim::All
        } else {
            csv::Trim::Headers
        };
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .flexible(true)
            .has_headers(true)
            .trim(trim)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(StoreError::ParseError("no header row".to_string()));
        }

        let mut index = HashMap::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated headers
            index.entry(header.clone()).or_insert(i);
        }

        let mut records = Vec::new();
        for (position, row) in csv_reader.records().enumerate() {
            let row = row?;
            let mut values: Vec<String> = row.iter().take(headers.len()).map(str::to_string).collect();
            values.resize(headers.len(), String::new());
            records.push(Record {
                id: RecordId::from_position(position),
                values,
            });
        }

        debug!(
            "Loaded {} records with {} columns",
            records.len(),
            headers.len()
        );

        Ok(Self {
            headers,
            index,
            records,
            label: "<memory>".to_string(),
        })
    }

    /// Column headers in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Human-readable origin of the table (file path or `<memory>`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the origin label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Number of records, which is also the largest identifier.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a header is present.
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Record by identifier.
    pub fn get(&self, id: RecordId) -> Option<Row<'_>> {
        self.records.get(id.position()).map(|record| Row { table: self, record })
    }

    /// `(header, value)` pairs of a record, for raw-row display.
    pub fn row_view(&self, id: RecordId) -> Option<Vec<(String, String)>> {
        self.get(id).map(|row| row.to_pairs())
    }

    /// Record by a raw user-supplied number.
    pub fn lookup(&self, requested: usize) -> Result<Row<'_>, StoreError> {
        let max = self.len();
        let id = RecordId::new(requested).ok_or(StoreError::OutOfRange { requested, max })?;
        self.get(id)
            .ok_or(StoreError::RecordNotFound { requested, max })
    }

    /// Iterate over all records in identifier order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(move |record| Row { table: self, record })
    }
}

/// A borrowed record together with its table's header.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    record: &'a Record,
}

impl<'a> Row<'a> {
    /// Identifier of this record.
    pub fn id(&self) -> RecordId {
        self.record.id
    }

    /// Raw cell by header name; `None` when the column does not exist.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let (table, record) = (self.table, self.record);
        let i = *table.index.get(column)?;
        record.values.get(i).map(String::as_str)
    }

    /// `(header, value)` pairs in source order, for raw-row display.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let (table, record) = (self.table, self.record);
        table
            .headers
            .iter()
            .map(String::as_str)
            .zip(record.values.iter().map(String::as_str))
    }

    /// Owned copy of [`Row::fields`].
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.fields()
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect()
    }
}
