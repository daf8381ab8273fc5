//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! Runs the reconciliation periodically so company flags track the
//! job market without manual triggering. Each run re-fetches the
//! reference snapshot from scratch; no state survives between runs.

use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::config::Config;
use crate::domains::reconciliation::reconcile;
use crate::kernel::deps::Deps;

/// Hourly, on the hour.
const RECONCILE_SCHEDULE: &str = "0 0 * * * *";

/// Start the scheduler with the periodic reconciliation task.
pub async fn start_scheduler(config: Config, deps: Deps) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(RECONCILE_SCHEDULE, move |_uuid, _lock| {
        let config = config.clone();
        let deps = deps.clone();
        Box::pin(async move {
            if let Err(e) = run_reconciliation(&config, &deps).await {
                tracing::error!("Scheduled reconciliation failed: {:#}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduled tasks started (reconciliation every hour)");
    Ok(scheduler)
}

/// Run one reconciliation and log its summary.
async fn run_reconciliation(config: &Config, deps: &Deps) -> Result<()> {
    tracing::info!("Running scheduled reconciliation");

    let report = reconcile(
        &config.search_queries,
        deps.search.as_ref(),
        deps.store.as_ref(),
    )
    .await?;

    tracing::info!(
        listings = report.total_listings,
        employers = report.unique_employers,
        matched = report.matched,
        unmatched = report.unmatched,
        "Scheduled reconciliation complete"
    );
    Ok(())
}
