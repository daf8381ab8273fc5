use thiserror::Error;

/// Abort-class failures for a reconciliation run.
///
/// Store write failures are deliberately absent: they are best-effort
/// and accumulate in the report instead of aborting the run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The search provider failed. The whole run aborts, since a
    /// partial listing pool would misreport unsearched companies as
    /// "not found".
    #[error("search provider error for query {query:?}: {error:#}")]
    Provider { query: String, error: anyhow::Error },

    /// The reference snapshot could not be loaded; matching requires
    /// the full snapshot.
    #[error("reference store read error: {0:#}")]
    StoreRead(anyhow::Error),
}
