pub mod dedupe;
pub mod error;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod orchestrator;

// Re-export commonly used types
pub use dedupe::dedupe_employers;
pub use error::ReconcileError;
pub use matcher::find_match;
pub use models::{
    EmployerCandidate, MatchSummary, RawJobListing, ReconciliationReport, ReferenceCompany,
};
pub use normalize::normalize_company_name;
pub use orchestrator::{reconcile, TRACKING_STATUS_OPENING, UNMATCHED_PREVIEW_LIMIT};
