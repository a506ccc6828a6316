use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use geoview::store::TableSource;
use geoview::viewer::{CoordinateMissing, RenderOutcome, Viewer};

use super::{Config, PolicyArgs};

/// Render one record: print its row, write the map
pub fn run(
    input: Option<PathBuf>,
    default: Option<PathBuf>,
    record: usize,
    output: PathBuf,
    json: Option<PathBuf>,
    args: PolicyArgs,
) -> Result<()> {
    let settings = Config::load(args.config.as_deref())?.settings(&args)?;
    let source = TableSource::new(input).with_default_path(default.unwrap_or(settings.default_path));

    let viewer = Viewer::open(&source, &settings.load, settings.viewer)?;
    let outcome = viewer.render(record)?;

    println!("{}", viewer.caption(outcome.id));
    println!("Source: {}", viewer.table().label());
    println!();
    print_row(&outcome);

    if let Some(warning) = &outcome.warning {
        print_warning(warning);
        return Ok(());
    }

    if let Some(page) = viewer.page(&outcome)? {
        std::fs::write(&output, page)
            .with_context(|| format!("Failed to write map: {}", output.display()))?;
        println!();
        println!("Map written to {}", output.display());
    }

    if let (Some(path), Some(map)) = (json, &outcome.map) {
        std::fs::write(&path, map.to_json()?)
            .with_context(|| format!("Failed to write JSON: {}", path.display()))?;
        println!("JSON written to {}", path.display());
    }

    if let Some(decision) = &outcome.decision {
        info!(
            "Record {}: {} marker(s), reference shown: {}",
            outcome.id,
            decision.marker_count(),
            decision.show_reference
        );
    }

    Ok(())
}

fn print_row(outcome: &RenderOutcome) {
    let width = outcome
        .row
        .iter()
        .map(|(header, _)| header.chars().count())
        .max()
        .unwrap_or(0);

    println!("Row:");
    for (header, value) in &outcome.row {
        println!("  {:<width$}  {}", header, value, width = width);
    }
}

fn print_warning(warning: &CoordinateMissing) {
    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        eprintln!("{} {}", style("Warning:").yellow().bold(), warning);
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        eprintln!("Warning: {}", warning);
    }
}
