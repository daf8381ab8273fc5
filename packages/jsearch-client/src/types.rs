use serde::Deserialize;

/// A single job listing from a JSearch result page.
///
/// Only the fields the reconciliation pipeline consumes are mapped;
/// the API returns many more.
#[derive(Debug, Clone, Deserialize)]
pub struct JobListing {
    pub employer_name: String,
    pub job_title: String,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
}

/// Wrapper for JSearch API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<JobListing>,
}
