//! CLI definition for `sigfield`.
//!
//! Only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sigfield - drive an external signature field from the command line.
///
/// Field configuration is read from a TOML, YAML or JSON file and may be
/// overridden with SIGFIELD_* environment variables
/// (e.g. SIGFIELD_SERVICE_NAME=DocuSign).
#[derive(Parser, Debug)]
#[command(name = "sigfield")]
#[command(version)]
#[command(about = "Replay change/blur events against an external signature field")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a JSON event script and print each outcome
    Replay {
        /// Field configuration file
        #[arg(long, short, value_name = "FILE")]
        config: PathBuf,

        /// JSON array of events; reads stdin when omitted
        #[arg(long, short, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Hide errors while the user is still typing
        #[arg(long)]
        suppress_on_change: bool,

        /// Show this message instead of the default error
        #[arg(long, value_name = "MESSAGE")]
        custom_error: Option<String>,

        /// Output one JSON object per event
        #[arg(long)]
        json: bool,
    },

    /// Show how a persisted value seeds a field
    Parse {
        /// Persisted value
        raw: String,

        /// Signing service bound to the field
        #[arg(long, default_value = "")]
        service_name: String,
    },
}
