use anyhow::Result;
use log::info;
use std::path::PathBuf;

use super::{Config, PolicyArgs};

/// Validate every record of an address table
pub fn run(file: Option<PathBuf>, args: PolicyArgs) -> Result<()> {
    use geoview::validator::validate_file;

    let settings = Config::load(args.config.as_deref())?.settings(&args)?;
    let file = file.unwrap_or(settings.default_path);

    info!("geoview Validator");
    info!("File: {}", file.display());

    match validate_file(&file, &settings.load, &settings.viewer) {
        Ok(report) => {
            println!("{}", report.format_colored());

            // Exit with error code if validation failed
            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {:#}", e);
            std::process::exit(1);
        }
    }
}
