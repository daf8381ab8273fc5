// Mock implementations for testing
//
// Provides in-memory search and store services that can be injected
// into the orchestrator in tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::traits::{BaseJobSearchService, BaseReferenceStore};
use crate::domains::reconciliation::models::{RawJobListing, ReferenceCompany};

// =============================================================================
// Mock Job Search Service
// =============================================================================

pub struct MockJobSearchService {
    results: Arc<Mutex<HashMap<String, Vec<RawJobListing>>>>,
    fail_all: bool,
    search_calls: Arc<Mutex<Vec<String>>>,
}

impl MockJobSearchService {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(HashMap::new())),
            fail_all: false,
            search_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Canned listings returned for a specific query.
    pub fn with_results(self, query: &str, listings: Vec<RawJobListing>) -> Self {
        self.results
            .lock()
            .unwrap()
            .insert(query.to_string(), listings);
        self
    }

    /// Make every search call fail.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Queries that were searched, in call order.
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }
}

impl Default for MockJobSearchService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseJobSearchService for MockJobSearchService {
    async fn search(&self, query: &str) -> Result<Vec<RawJobListing>> {
        self.search_calls.lock().unwrap().push(query.to_string());
        if self.fail_all {
            return Err(anyhow!("mock search failure"));
        }
        Ok(self
            .results
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

// =============================================================================
// Mock Reference Store
// =============================================================================

/// One recorded update call against the mock store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreUpdate {
    ActiveRole {
        company_name: String,
        active: bool,
    },
    TrackingStatus {
        company_name: String,
        status: String,
    },
}

pub struct MockReferenceStore {
    companies: Vec<ReferenceCompany>,
    fail_list: bool,
    fail_updates_for: HashSet<String>,
    updates: Arc<Mutex<Vec<StoreUpdate>>>,
}

impl MockReferenceStore {
    pub fn new(companies: Vec<ReferenceCompany>) -> Self {
        Self {
            companies,
            fail_list: false,
            fail_updates_for: HashSet::new(),
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make the snapshot fetch fail.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make both update calls fail for one company.
    pub fn failing_updates_for(mut self, company_name: &str) -> Self {
        self.fail_updates_for.insert(company_name.to_string());
        self
    }

    /// All update calls recorded so far, in call order.
    pub fn updates(&self) -> Vec<StoreUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseReferenceStore for MockReferenceStore {
    async fn list_companies(&self) -> Result<Vec<ReferenceCompany>> {
        if self.fail_list {
            return Err(anyhow!("mock snapshot failure"));
        }
        Ok(self.companies.clone())
    }

    async fn set_active_role(&self, company_name: &str, active: bool) -> Result<()> {
        if self.fail_updates_for.contains(company_name) {
            return Err(anyhow!("mock update failure for {company_name}"));
        }
        self.updates.lock().unwrap().push(StoreUpdate::ActiveRole {
            company_name: company_name.to_string(),
            active,
        });
        Ok(())
    }

    async fn set_tracking_status(
        &self,
        company_name: &str,
        status: &str,
        _checked_at: DateTime<Utc>,
    ) -> Result<()> {
        if self.fail_updates_for.contains(company_name) {
            return Err(anyhow!("mock update failure for {company_name}"));
        }
        self.updates
            .lock()
            .unwrap()
            .push(StoreUpdate::TrackingStatus {
                company_name: company_name.to_string(),
                status: status.to_string(),
            });
        Ok(())
    }
}

// =============================================================================
// Test data builders
// =============================================================================

pub fn test_listing(employer: &str, title: &str) -> RawJobListing {
    RawJobListing {
        employer_name: employer.to_string(),
        job_title: title.to_string(),
        city: "Minneapolis".to_string(),
        apply_url: "https://example.com/apply".to_string(),
    }
}

pub fn test_company(id: &str, name: &str, tier: &str) -> ReferenceCompany {
    ReferenceCompany {
        id: id.to_string(),
        name: name.to_string(),
        tier: tier.to_string(),
        has_active_role: false,
    }
}
