//! # Table Validation
//!
//! Whole-table quality report for an address table, run before browsing
//! record by record.
//!
//! ## Validation Checklist
//!
//! 1. **Structure**: the file exists and parses as CSV with a header row
//! 2. **Schema**: required columns are present (failure otherwise)
//! 3. **Coordinates**: every record has usable geocoded coordinates, reference
//!    pairs are either usable or fully empty, values are within range
//! 4. **Markers**: how records will render under the active policy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geoview::store::LoadOptions;
//! use geoview::validator::validate_file;
//! use geoview::viewer::ViewerConfig;
//! use std::path::Path;
//!
//! let report = validate_file(
//!     Path::new("direcciones_X.csv"),
//!     &LoadOptions::default(),
//!     &ViewerConfig::default(),
//! )?;
//! println!("{}", report);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::Result;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod data;
mod report;
mod structure;


use crate::schema::missing_columns;
use crate::store::{LoadOptions, Table};
use crate::viewer::ViewerConfig;

/// Validate a CSV file from disk.
///
/// Structural problems (missing file, unparseable CSV) are recorded as failed
/// checks and end validation early; the report is still returned.
pub fn validate_file(
    path: &Path,
    options: &LoadOptions,
    config: &ViewerConfig,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(path.display().to_string());

    // 1. Structure Check
    let Some(table) = structure::check_structure(path, options, &mut report)? else {
        return Ok(report);
    };

    check_loaded(&table, config, &mut report);
    Ok(report)
}

/// Validate an already-loaded table.
pub fn validate_table(table: &Table, config: &ViewerConfig) -> ValidationReport {
    let mut report = ValidationReport::new(table.label());
    check_loaded(table, config, &mut report);
    report
}

fn check_loaded(table: &Table, config: &ViewerConfig, report: &mut ValidationReport) {
    // 2. Schema Check
    let required = config.required.names(&config.columns);
    let missing = missing_columns(table.headers(), &required);
    if missing.is_empty() {
        report.add_check(ValidationCheck::ok(format!(
            "Required columns present ({})",
            required.join(", ")
        )));
    } else {
        report.add_check(ValidationCheck::failed(
            "Required columns present",
            format!("missing {}", missing.join(", ")),
        ));
        return;
    }

    if table.is_empty() {
        report.add_check(ValidationCheck::failed("Table has records", "no data rows"));
        return;
    }
    report.add_check(ValidationCheck::ok(format!(
        "Table has records ({})",
        table.len()
    )));

    // 3. Coordinate Check / 4. Marker Summary
    data::check_records(table, config, report);
}
