//! Concrete adapters wiring the API clients into the kernel traits,
//! plus the `Deps` container handed to the orchestrator.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use airtable_client::AirtableClient;
use jsearch_client::JsearchClient;

use crate::config::Config;
use crate::domains::reconciliation::models::{RawJobListing, ReferenceCompany};
use crate::kernel::traits::{BaseJobSearchService, BaseReferenceStore};

// Airtable field names in the companies table.
const FIELD_ACTIVE_ROLE: &str = "Active Role";
const FIELD_TRACKING_STATUS: &str = "Tracking Status";
const FIELD_LAST_CHECKED: &str = "Last Checked";

/// Typed view of a company record's fields.
#[derive(Debug, Deserialize)]
struct CompanyFields {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Tier", default)]
    tier: Option<String>,
    #[serde(rename = "Active Role", default)]
    active_role: Option<bool>,
}

/// Dependency container for a reconciliation run.
#[derive(Clone)]
pub struct Deps {
    pub search: Arc<dyn BaseJobSearchService>,
    pub store: Arc<dyn BaseReferenceStore>,
}

impl Deps {
    pub fn from_config(config: &Config) -> Self {
        Self {
            search: Arc::new(JsearchSearchService::new(
                config.rapidapi_key.clone(),
                config.jsearch_pages,
            )),
            store: Arc::new(AirtableReferenceStore::new(
                config.airtable_api_key.clone(),
                config.airtable_base_id.clone(),
                config.airtable_table.clone(),
            )),
        }
    }
}

/// JSearch-backed search provider.
pub struct JsearchSearchService {
    client: JsearchClient,
    pages: u32,
}

impl JsearchSearchService {
    pub fn new(api_key: String, pages: u32) -> Self {
        Self {
            client: JsearchClient::new(api_key),
            pages,
        }
    }
}

#[async_trait]
impl BaseJobSearchService for JsearchSearchService {
    async fn search(&self, query: &str) -> Result<Vec<RawJobListing>> {
        let listings = self
            .client
            .search_jobs(query, self.pages)
            .await
            .with_context(|| format!("JSearch query failed: {query}"))?;

        Ok(listings
            .into_iter()
            .map(|l| RawJobListing {
                employer_name: l.employer_name,
                job_title: l.job_title,
                city: l.job_city.unwrap_or_default(),
                apply_url: l.job_apply_link.unwrap_or_default(),
            })
            .collect())
    }
}

/// Airtable-backed reference store.
///
/// Updates are keyed by company name at the trait boundary, so the
/// adapter caches record ids by lower-cased name while serving
/// `list_companies`. Updating a name that was never listed is an
/// error rather than a silent no-op.
pub struct AirtableReferenceStore {
    client: AirtableClient,
    table: String,
    record_ids: Mutex<HashMap<String, String>>,
}

impl AirtableReferenceStore {
    pub fn new(token: String, base_id: String, table: String) -> Self {
        Self {
            client: AirtableClient::new(token, base_id),
            table,
            record_ids: Mutex::new(HashMap::new()),
        }
    }

    fn record_id(&self, company_name: &str) -> Result<String> {
        let ids = self.record_ids.lock().unwrap();
        ids.get(&company_name.to_lowercase()).cloned().ok_or_else(|| {
            anyhow!("no record id cached for company {company_name:?}; list companies first")
        })
    }
}

#[async_trait]
impl BaseReferenceStore for AirtableReferenceStore {
    async fn list_companies(&self) -> Result<Vec<ReferenceCompany>> {
        let records = self
            .client
            .list_records::<CompanyFields>(&self.table)
            .await
            .context("Failed to list companies from Airtable")?;

        let mut ids = HashMap::with_capacity(records.len());
        let companies = records
            .into_iter()
            .map(|record| {
                ids.insert(record.fields.name.to_lowercase(), record.id.clone());
                ReferenceCompany {
                    id: record.id,
                    name: record.fields.name,
                    tier: record.fields.tier.unwrap_or_default(),
                    has_active_role: record.fields.active_role.unwrap_or(false),
                }
            })
            .collect();

        *self.record_ids.lock().unwrap() = ids;
        Ok(companies)
    }

    async fn set_active_role(&self, company_name: &str, active: bool) -> Result<()> {
        let record_id = self.record_id(company_name)?;
        self.client
            .update_record(&self.table, &record_id, json!({ FIELD_ACTIVE_ROLE: active }))
            .await
            .with_context(|| format!("Failed to set active-role flag for {company_name}"))?;
        Ok(())
    }

    async fn set_tracking_status(
        &self,
        company_name: &str,
        status: &str,
        checked_at: DateTime<Utc>,
    ) -> Result<()> {
        let record_id = self.record_id(company_name)?;
        self.client
            .update_record(
                &self.table,
                &record_id,
                json!({
                    FIELD_TRACKING_STATUS: status,
                    FIELD_LAST_CHECKED: checked_at.to_rfc3339(),
                }),
            )
            .await
            .with_context(|| format!("Failed to update tracking status for {company_name}"))?;
        Ok(())
    }
}
