use anyhow::{Context, Result};
use std::path::PathBuf;

use geoview::schema::missing_columns;
use geoview::store::Table;

use super::{Config, PolicyArgs};

/// Display information about an address table
pub fn run(file: Option<PathBuf>, args: PolicyArgs) -> Result<()> {
    let settings = Config::load(args.config.as_deref())?.settings(&args)?;
    let file = file.unwrap_or(settings.default_path);

    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let table = Table::from_path(&file, &settings.load)
        .with_context(|| format!("Failed to read table: {}", file.display()))?;

    println!("geoview Table Information");
    println!("=========================");
    println!("File: {}", file.display());
    println!();

    println!("Statistics:");
    println!("  Records: {}", table.len());
    println!("  Columns: {}", table.headers().len());
    println!();

    let config = &settings.viewer;
    let required = config.required.names(&config.columns);
    let missing = missing_columns(table.headers(), &required);

    println!("Columns:");
    for (i, header) in table.headers().iter().enumerate() {
        let marker = if required.contains(&header.as_str()) {
            " (required)"
        } else {
            ""
        };
        println!("  {:3}. {}{}", i + 1, header, marker);
    }
    println!();

    if missing.is_empty() {
        println!("Required columns: all present");
    } else {
        println!("Required columns: missing {}", missing.join(", "));
    }

    Ok(())
}
