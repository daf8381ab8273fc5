//! Kernel module - infrastructure and dependencies.

pub mod deps;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use deps::{AirtableReferenceStore, Deps, JsearchSearchService};
pub use test_dependencies::{MockJobSearchService, MockReferenceStore, StoreUpdate};
pub use traits::*;
