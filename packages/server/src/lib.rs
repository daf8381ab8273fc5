// Job-Posting Reconciliation - Core
//
// This crate reconciles employer names returned by a job-search API
// against a reference list of companies, flagging which companies
// currently have an open, matching posting.
//
// Pure matching logic lives in domains/reconciliation; external
// collaborators (search provider, reference store) are reached only
// through the traits in kernel/traits.rs.

pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
