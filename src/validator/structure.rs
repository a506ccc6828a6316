use std::path::Path;

use anyhow::Result;

use crate::store::{LoadOptions, StoreError, Table};

use super::{ValidationCheck, ValidationReport};

/// Step 1: Structure validation
///
/// Returns the loaded table, or `None` when a structural check failed.
pub(crate) fn check_structure(
    path: &Path,
    options: &LoadOptions,
    report: &mut ValidationReport,
) -> Result<Option<Table>> {
    if !path.exists() {
        report.add_check(ValidationCheck::failed(
            "Path exists",
            format!("Path does not exist: {}", path.display()),
        ));
        return Ok(None);
    }
    if !path.is_file() {
        report.add_check(ValidationCheck::failed(
            "Path exists",
            "Path is not a regular file",
        ));
        return Ok(None);
    }
    report.add_check(ValidationCheck::ok("Path exists"));

    match Table::from_path(path, options) {
        Ok(table) => {
            report.add_check(ValidationCheck::ok(format!(
                "CSV parses ({} columns, delimiter '{}')",
                table.headers().len(),
                options.delimiter as char
            )));
            Ok(Some(table))
        }
        Err(e @ (StoreError::CsvError(_) | StoreError::ParseError(_))) => {
            report.add_check(ValidationCheck::failed("CSV parses", e.to_string()));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
