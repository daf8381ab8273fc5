// Business domains
pub mod reconciliation;
