//! # geoview
//!
//! A command-line viewer for geocoded address tables. Each invocation loads
//! one table and renders one record.
//!
//! ## Usage
//!
//! ```bash
//! # Render record 3 of the default table to map.html
//! geoview view --record 3
//!
//! # Render from a specific file, also writing the map as JSON
//! geoview view --input direcciones.csv --record 12 --json map.json
//!
//! # Summarize a table, then check every record
//! geoview info direcciones.csv
//! geoview validate direcciones.csv --reference-policy reject-invalid
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{dispatch, init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    dispatch(cli)
}
