// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The matching rules live in domains/reconciliation; these traits are
// just the seams to the external collaborators.
//
// Naming convention: Base* for trait names (e.g., BaseJobSearchService)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domains::reconciliation::models::{RawJobListing, ReferenceCompany};

// =============================================================================
// Job Search Provider Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseJobSearchService: Send + Sync {
    /// Run one search query, returning every listing across all result
    /// pages in provider order. Pagination is the implementation's
    /// concern.
    async fn search(&self, query: &str) -> Result<Vec<RawJobListing>>;
}

// =============================================================================
// Reference Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseReferenceStore: Send + Sync {
    /// Fetch the full company snapshot in the store's stable order.
    /// The returned order is a contract: the matcher scans it as-is.
    async fn list_companies(&self) -> Result<Vec<ReferenceCompany>>;

    /// Set a company's active-role flag.
    async fn set_active_role(&self, company_name: &str, active: bool) -> Result<()>;

    /// Record a company's tracking status and when it was checked.
    async fn set_tracking_status(
        &self,
        company_name: &str,
        status: &str,
        checked_at: DateTime<Utc>,
    ) -> Result<()>;
}
