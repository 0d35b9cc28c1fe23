// kpreport-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use kpreport_core::config::{DEFAULT_INPUT_LIST, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "kpreport: media duration report generator",
    long_about = "Reads a list of media files, looks each one up in the film catalog, \
                  probes its duration with ffprobe and writes a tab-separated report."
)]
pub struct Cli {
    /// Runs `report` with default arguments when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Also write log records to this file (without color codes)
    #[arg(long, global = true, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output (NO_COLOR is honored as well)
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates the duration report for every file in the input list
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Newline-delimited list of media file paths
    #[arg(short = 'i', long = "input", value_name = "LIST_FILE", default_value = DEFAULT_INPUT_LIST)]
    pub input_list: PathBuf,

    /// Report file; truncated at the start of every run
    #[arg(short = 'o', long = "output", value_name = "REPORT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Comma-separated duration buckets in minutes (e.g., 90,60,30,10,5)
    #[arg(long, value_delimiter = ',', value_name = "MINUTES", default_value = "90,60,30,10,5")]
    pub durations: Vec<u32>,

    /// Catalog API base URL; the catalog id is appended to it.
    /// Can also be set via the KPREPORT_API_URL environment variable.
    #[arg(long, value_name = "URL", env = "KPREPORT_API_URL")]
    pub api_url: Option<String>,

    /// Client id sent to the catalog API.
    /// Can also be set via the KPREPORT_CLIENT_ID environment variable.
    #[arg(long, value_name = "CLIENT_ID", env = "KPREPORT_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Optional: catalog request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Commands {
    /// The command run when no subcommand is given on the command line.
    pub fn default_report() -> Self {
        Commands::Report(ReportArgs::parse_from(["report"]))
    }
}
