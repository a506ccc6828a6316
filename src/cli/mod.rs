use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use geoview::policy::ReferencePolicy;
use geoview::schema::RequiredColumns;

mod config;
mod info;
mod validate;
mod view;

pub use config::Config;

/// geoview - Record-by-record map viewer for geocoded address tables
#[derive(Parser)]
#[command(name = "geoview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Handling of records whose reference point is unusable.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReferencePolicyArg {
    /// Show only the geocoded point
    #[default]
    Degrade,
    /// Reject garbled or half-filled reference pairs
    RejectInvalid,
    /// Reject any record without a usable reference pair
    RequireBoth,
}

impl From<ReferencePolicyArg> for ReferencePolicy {
    fn from(arg: ReferencePolicyArg) -> Self {
        match arg {
            ReferencePolicyArg::Degrade => ReferencePolicy::Degrade,
            ReferencePolicyArg::RejectInvalid => ReferencePolicy::RejectInvalid,
            ReferencePolicyArg::RequireBoth => ReferencePolicy::RequireBoth,
        }
    }
}

/// Columns a table must carry.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum RequiredArg {
    /// Coordinates plus method, score and difference
    #[default]
    Full,
    /// The four coordinate columns only
    Coordinates,
}

impl From<RequiredArg> for RequiredColumns {
    fn from(arg: RequiredArg) -> Self {
        match arg {
            RequiredArg::Full => RequiredColumns::Full,
            RequiredArg::Coordinates => RequiredColumns::Coordinates,
        }
    }
}

/// Flags shared by every command that interprets a table.
#[derive(clap::Args, Debug, Default)]
pub struct PolicyArgs {
    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Handling of unusable reference points (overrides the config file)
    #[arg(long, value_enum)]
    pub reference_policy: Option<ReferencePolicyArg>,

    /// Required column set (overrides the config file)
    #[arg(long, value_enum)]
    pub required: Option<RequiredArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one record to an HTML map and print its row
    View {
        /// Address table to load (takes precedence over the default file)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Default table used when no input is given
        #[arg(long, value_name = "FILE")]
        default: Option<PathBuf>,

        /// Record to show, 1-based
        #[arg(short, long, default_value_t = 1)]
        record: usize,

        /// HTML map output path
        #[arg(short, long, value_name = "FILE", default_value = "map.html")]
        output: PathBuf,

        /// Also write the map as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Display record count, columns and required-column status
    Info {
        /// Address table (defaults to the configured default file)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Validate every record of an address table
    Validate {
        /// Address table (defaults to the configured default file)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::View {
            input,
            default,
            record,
            output,
            json,
            policy,
        } => view::run(input, default, record, output, json, policy),
        Commands::Info { file, policy } => info::run(file, policy),
        Commands::Validate { file, policy } => validate::run(file, policy),
    }
}
