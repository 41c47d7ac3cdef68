use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use homepage_core::{Board, Dashboard, MemorySurface, Mutation, MutationKind, events};

use super::helpers::{build_runtime, load_validated_config};

const FLUSH_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_validated_config(matches, "run")?;
    let duration = matches.get_one::<u64>("duration").copied();

    info!(
        event = "cli.run_started",
        base_url = config.base_url(),
        refresh_policy = %config.refresh_policy(),
        duration_secs = ?duration
    );

    let runtime = build_runtime()?;
    let result = runtime.block_on(async {
        let dashboard =
            Dashboard::connect(MemorySurface::with_dashboard_layout(), &config).await?;

        let cancel = CancellationToken::new();
        let handle = dashboard.start(cancel.clone());
        let board = handle.board();
        let mut input = spawn_stdin_reader();
        let mut input_open = true;

        let deadline = async {
            match duration {
                Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
                None => std::future::pending::<()>().await,
            }
        };
        let interrupted = tokio::signal::ctrl_c();
        tokio::pin!(deadline, interrupted);

        let mut flush = tokio::time::interval(FLUSH_INTERVAL);

        let reason = loop {
            tokio::select! {
                _ = &mut deadline => break "duration_elapsed",
                _ = &mut interrupted => break "interrupted",
                line = input.recv(), if input_open => match line.as_deref().map(str::trim) {
                    Some("v") => {
                        flush_mutations(&board).await;
                        handle.toggle_backdrop().await;
                    }
                    Some("q") => break "quit",
                    Some("") => {}
                    Some(other) => {
                        eprintln!("Unknown input '{}': type 'v' to toggle the backdrop or 'q' to quit", other);
                    }
                    None => input_open = false,
                },
                _ = flush.tick() => flush_mutations(&board).await,
            }
        };

        handle.stop();
        let stopped = handle.wait().await;
        flush_mutations(&board).await;

        info!(event = "cli.run_completed", reason = reason);
        stopped
    });

    if let Err(e) = result {
        eprintln!("❌ Dashboard failed: {}", e);
        error!(event = "cli.run_failed", error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    events::log_app_shutdown();
    Ok(())
}

/// Read stdin lines on a plain thread; the channel closes at EOF.
///
/// A blocking thread is used instead of `tokio::io::stdin` so runtime
/// shutdown never waits on a pending read.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

async fn flush_mutations(board: &Arc<Mutex<Board<MemorySurface>>>) {
    let mutations = board.lock().await.surface.drain_mutations();
    if mutations.is_empty() {
        return;
    }

    let mut stdout = std::io::stdout().lock();
    for mutation in &mutations {
        // A closed pipe is not worth failing the dashboard over.
        let _ = writeln!(stdout, "{}", format_mutation(mutation));
    }
    let _ = stdout.flush();
}

/// `<selector> <op> <value>`
pub(crate) fn format_mutation(mutation: &Mutation) -> String {
    let selector = mutation.selector;
    match &mutation.kind {
        MutationKind::Text { value } => format!("{} text {}", selector, value),
        MutationKind::Attribute { name, value } => {
            format!("{} attribute {}={}", selector, name, value)
        }
        MutationKind::Style { property, value } => {
            format!("{} style {}: {}", selector, property, value)
        }
        MutationKind::ClassAdded { class } => format!("{} class_added {}", selector, class),
        MutationKind::ClassRemoved { class } => format!("{} class_removed {}", selector, class),
    }
}
