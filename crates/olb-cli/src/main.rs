/// OLB command-line tool — inspect, validate and export schematic
/// library files.
///
/// # Command overview
///
/// ```text
/// olb <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a human-readable record summary of a library
///   validate   Check a library for structural correctness
///   export     Emit the decoded record tree as JSON
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Increase diagnostic verbosity (-v debug, -vv trace)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// Errors and decode diagnostics go to stderr so stdout can be piped
/// cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_export;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The OLB schematic-library command-line tool.
#[derive(Parser)]
#[command(name = "olb", version, about = "OLB schematic library CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase diagnostic verbosity (-v for debug, -vv for trace).
    ///
    /// Diagnostics include every skipped byte span and every window
    /// checkpoint, which is the fastest way to locate where a broken
    /// file diverges from the recovered layout.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable summary of each record in a library.
    Inspect(InspectArgs),
    /// Check a library for structural correctness.
    Validate(ValidateArgs),
    /// Emit the decoded record tree as JSON.
    Export(ExportArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `olb inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the library file to inspect.
    pub file: PathBuf,
}

/// Arguments for `olb validate`.
///
/// Runs a full decode and reports either a set of success checkmarks or
/// a diagnostic error line. Exit code 0 on a valid file, 1 on any
/// structural defect.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the library file to validate.
    pub file: PathBuf,
}

/// Arguments for `olb export`.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to the library file to export.
    pub file: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Export(args) => cmd_export::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
