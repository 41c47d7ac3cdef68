use clap::ArgMatches;
use tracing::error;

use homepage_core::events;

pub mod helpers;

mod config;
mod run;
mod snapshot;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("snapshot", sub_matches)) => snapshot::handle_snapshot_command(sub_matches),
        Some(("config", sub_matches)) => config::handle_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
