use chrono::Utc;

use super::dedupe::dedupe_employers;
use super::error::ReconcileError;
use super::matcher::find_match;
use super::models::{MatchSummary, ReconciliationReport};
use crate::kernel::traits::{BaseJobSearchService, BaseReferenceStore};

/// Tracking status written to matched companies.
pub const TRACKING_STATUS_OPENING: &str = "opening";

/// Cap on the unmatched-employer preview in the report.
pub const UNMATCHED_PREVIEW_LIMIT: usize = 20;

/// Run one full reconciliation: load the reference snapshot, run every
/// configured search, dedupe employers, match each against the
/// snapshot, and flag matched companies in the store.
///
/// Provider and snapshot-read failures abort the whole run — a partial
/// listing pool would misreport unsearched companies as "not found".
/// Store write failures are best-effort: logged, recorded in the
/// report, and never allowed to block the sibling update or the
/// remaining candidates.
pub async fn reconcile(
    queries: &[String],
    search: &dyn BaseJobSearchService,
    store: &dyn BaseReferenceStore,
) -> Result<ReconciliationReport, ReconcileError> {
    let ran_at = Utc::now();

    // Reference data is loaded once and treated as a stable snapshot
    // for the whole run.
    let companies = store
        .list_companies()
        .await
        .map_err(ReconcileError::StoreRead)?;
    tracing::info!(companies = companies.len(), "Loaded reference snapshot");

    let mut listings = Vec::new();
    for query in queries {
        let batch = search
            .search(query)
            .await
            .map_err(|error| ReconcileError::Provider {
                query: query.clone(),
                error,
            })?;
        tracing::info!(query = %query, count = batch.len(), "Search complete");
        listings.extend(batch);
    }
    let total_listings = listings.len();

    let candidates = dedupe_employers(listings);
    tracing::info!(
        listings = total_listings,
        employers = candidates.len(),
        "Deduplicated employers"
    );

    let mut matches = Vec::new();
    let mut unmatched = Vec::new();
    let mut update_failures = Vec::new();

    for candidate in &candidates {
        let Some(company) = find_match(&candidate.name, &companies) else {
            unmatched.push(candidate.name.clone());
            continue;
        };

        tracing::info!(
            employer = %candidate.name,
            company = %company.name,
            tier = %company.tier,
            "Matched employer to company"
        );

        // The two updates are independent; one failing must not stop
        // the other from being attempted.
        let mut failed = false;
        if let Err(e) = store.set_active_role(&company.name, true).await {
            tracing::warn!(company = %company.name, error = %e, "Failed to set active-role flag");
            failed = true;
        }
        if let Err(e) = store
            .set_tracking_status(&company.name, TRACKING_STATUS_OPENING, Utc::now())
            .await
        {
            tracing::warn!(company = %company.name, error = %e, "Failed to update tracking status");
            failed = true;
        }
        if failed {
            update_failures.push(company.name.clone());
        }

        matches.push(MatchSummary {
            search_name: candidate.name.clone(),
            company_name: company.name.clone(),
            tier: company.tier.clone(),
        });
    }

    let report = ReconciliationReport {
        ran_at,
        total_listings,
        unique_employers: candidates.len(),
        matched: matches.len(),
        unmatched: unmatched.len(),
        matches,
        unmatched_preview: unmatched
            .into_iter()
            .take(UNMATCHED_PREVIEW_LIMIT)
            .collect(),
        update_failures,
    };

    tracing::info!(
        matched = report.matched,
        unmatched = report.unmatched,
        update_failures = report.update_failures.len(),
        "Reconciliation complete"
    );
    Ok(report)
}
