//! # elcat CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use elcat_api::telemetry;
use elcat_cli::scan::{run_scan, ScanArgs};
use elcat_cli::serve::{run_serve, ServeArgs};

/// Election catalog service and tooling.
#[derive(Parser, Debug)]
#[command(name = "elcat", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service.
    Serve(ServeArgs),

    /// Scan an elections directory and report what it contains.
    Scan(ScanArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    if let Err(e) = telemetry::init(cli.log_json || telemetry::json_requested(), default_directive)
    {
        eprintln!("cannot initialize logging: {e}");
        return ExitCode::from(2);
    }

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args),
        Commands::Scan(args) => run_scan(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
