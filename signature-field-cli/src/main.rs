//! sigfield - replay host events against an external signature field.
//!
//! Commands:
//! - `sigfield replay --config <file> [--script <file>]`: replay change/blur events
//! - `sigfield parse <raw>`: show how a persisted value seeds a field
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sigfield::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("signature_field=debug,sigfield=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let exit_code = match run(cli.command, &mut stdout.lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}
