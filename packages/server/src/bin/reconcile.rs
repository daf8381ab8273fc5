// Entry point for the job-posting reconciliation service.
//
// One-shot by default: runs a single reconciliation and prints the
// JSON report. With --cron, stays up and reconciles on a schedule.

use anyhow::{Context, Result};
use scout_core::domains::reconciliation::{reconcile, ReconcileError};
use scout_core::kernel::deps::Deps;
use scout_core::kernel::scheduled_tasks::start_scheduler;
use scout_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scout_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Reconciliation failed: {:#}", e);
        let error = serde_json::json!({ "error": format!("{e:#}") });
        println!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Missing credentials surface here, before any network call.
    let config = Config::from_env()
        .map_err(|e| ReconcileError::Configuration(format!("{e:#}")))?;
    tracing::info!(
        queries = config.search_queries.len(),
        "Configuration loaded"
    );

    let deps = Deps::from_config(&config);

    if std::env::args().any(|arg| arg == "--cron") {
        tracing::info!("Starting reconciliation scheduler");
        let _scheduler = start_scheduler(config, deps).await?;

        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for shutdown signal")?;
        tracing::info!("Shutting down");
        return Ok(());
    }

    let report = reconcile(
        &config.search_queries,
        deps.search.as_ref(),
        deps.store.as_ref(),
    )
    .await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );
    Ok(())
}
