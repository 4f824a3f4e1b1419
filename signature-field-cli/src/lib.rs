//! Command implementations for the `sigfield` binary.

pub mod cli;
pub mod replay;

pub use cli::{Cli, Commands};

use std::io::Write;

/// Run one command, writing its report to `out`.
pub fn run(command: Commands, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Commands::Replay {
            config,
            script,
            suppress_on_change,
            custom_error,
            json,
        } => {
            let hook = replay::ScriptHook {
                suppress_on_change,
                custom_error,
            };
            replay::run_replay(&config, script.as_deref(), &hook, json, out)
        }
        Commands::Parse { raw, service_name } => replay::run_parse(&raw, &service_name, out),
    }
}
