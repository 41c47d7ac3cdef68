use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use homepage_core::surface::NodeSnapshot;
use homepage_core::{BackdropState, Dashboard, MemorySurface, RefreshReport, events};

use super::helpers::{build_runtime, load_validated_config};

#[derive(Serialize)]
struct SnapshotOutput {
    base_url: String,
    backdrop: BackdropState,
    refreshed: RefreshedResources,
    nodes: Vec<NodeSnapshot>,
}

#[derive(Serialize)]
struct RefreshedResources {
    weather: bool,
    background: bool,
    greeting: bool,
}

impl From<RefreshReport> for RefreshedResources {
    fn from(report: RefreshReport) -> Self {
        Self {
            weather: report.weather,
            background: report.background,
            greeting: report.greeting,
        }
    }
}

pub(crate) fn handle_snapshot_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = load_validated_config(matches, "snapshot")?;

    info!(
        event = "cli.snapshot_started",
        base_url = config.base_url(),
        json_output = json_output
    );

    let runtime = build_runtime()?;
    let result = runtime.block_on(async {
        let dashboard =
            Dashboard::connect(MemorySurface::with_dashboard_layout(), &config).await?;
        let report = dashboard.refresh_once().await;

        let board = dashboard.board();
        let board = board.lock().await;
        Ok::<_, homepage_core::DashboardError>(SnapshotOutput {
            base_url: config.base_url().to_string(),
            backdrop: board.backdrop.state(),
            refreshed: report.into(),
            nodes: board.surface.snapshot(),
        })
    });

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("❌ Failed to refresh dashboard: {}", e);
            error!(event = "cli.snapshot_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Dashboard ({}, backdrop {}):", output.base_url, output.backdrop);
        let formatter = crate::table::TableFormatter::new(&output.nodes);
        formatter.print_table(&output.nodes);

        let failed: Vec<&str> = [
            ("weather", output.refreshed.weather),
            ("background", output.refreshed.background),
            ("greeting", output.refreshed.greeting),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| name)
        .collect();
        if !failed.is_empty() {
            println!("Not refreshed: {}", failed.join(", "));
        }
    }

    info!(
        event = "cli.snapshot_completed",
        weather = output.refreshed.weather,
        background = output.refreshed.background,
        greeting = output.refreshed.greeting
    );
    Ok(())
}
