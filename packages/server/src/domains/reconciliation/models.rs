use chrono::{DateTime, Utc};
use serde::Serialize;

/// A job listing as returned by the search provider. Immutable once
/// received; the provider's free-text employer name has not yet been
/// validated against the reference store.
#[derive(Debug, Clone)]
pub struct RawJobListing {
    pub employer_name: String,
    pub job_title: String,
    pub city: String,
    pub apply_url: String,
}

/// One distinct employer per run, keyed case-insensitively across all
/// searches. The first listing seen for an employer supplies the
/// representative title, location, and URL.
#[derive(Debug, Clone)]
pub struct EmployerCandidate {
    pub name: String,
    pub title: String,
    pub location: String,
    pub url: String,
}

/// A canonical company record from the reference store. The core only
/// reads these; updates go back through the store interface.
#[derive(Debug, Clone)]
pub struct ReferenceCompany {
    pub id: String,
    pub name: String,
    pub tier: String,
    pub has_active_role: bool,
}

/// One successful match, as summarized into the run report.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    /// Employer name as returned by the search provider.
    pub search_name: String,
    /// Canonical name of the company it resolved to.
    pub company_name: String,
    pub tier: String,
}

/// Summary of a single reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationReport {
    pub ran_at: DateTime<Utc>,
    pub total_listings: usize,
    pub unique_employers: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub matches: Vec<MatchSummary>,
    /// First N unmatched employer names; capped so a noisy run cannot
    /// balloon the report.
    pub unmatched_preview: Vec<String>,
    /// Canonical names of matched companies whose store updates failed.
    pub update_failures: Vec<String>,
}
