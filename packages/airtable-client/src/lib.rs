//! Pure Airtable REST API client.
//!
//! A minimal client for the Airtable API. Supports listing all records
//! of a table (following offset pagination) and patching a single
//! record's fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable_client::AirtableClient;
//! use serde_json::json;
//!
//! let client = AirtableClient::new("your-token".into(), "appXXXX".into());
//!
//! let records = client.list_records::<serde_json::Value>("Companies").await?;
//! client
//!     .update_record("Companies", &records[0].id, json!({ "Active Role": true }))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{AirtableError, Result};
pub use types::{Record, RecordPage};

use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://api.airtable.com/v0";

pub struct AirtableClient {
    client: reqwest::Client,
    token: String,
    base_id: String,
}

impl AirtableClient {
    pub fn new(token: String, base_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_id,
        }
    }

    /// Fetch one page of records, optionally continuing from an offset
    /// cursor returned by a previous page.
    pub async fn list_page<T: DeserializeOwned>(
        &self,
        table: &str,
        offset: Option<&str>,
    ) -> Result<RecordPage<T>> {
        let url = format!("{}/{}/{}", BASE_URL, self.base_id, table);
        let mut req = self.client.get(&url).bearer_auth(&self.token);
        if let Some(cursor) = offset {
            req = req.query(&[("offset", cursor)]);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AirtableError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: RecordPage<T> = resp.json().await?;
        Ok(page)
    }

    /// List every record in a table, following the offset cursor until
    /// the API stops returning one. Record order is Airtable's stable
    /// listing order.
    pub async fn list_records<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<Record<T>>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.list_page(table, offset.as_deref()).await?;
            records.extend(page.records);
            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        tracing::debug!(table, count = records.len(), "Listed Airtable records");
        Ok(records)
    }

    /// Patch a single record's fields. Fields not named in `fields`
    /// are left untouched.
    pub async fn update_record(
        &self,
        table: &str,
        record_id: &str,
        fields: serde_json::Value,
    ) -> Result<()> {
        let url = format!("{}/{}/{}/{}", BASE_URL, self.base_id, table, record_id);
        let resp = self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AirtableError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::debug!(table, record_id, "Patched Airtable record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct CompanyFields {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Tier", default)]
        tier: Option<String>,
    }

    #[test]
    fn test_page_deserializes_with_offset() {
        let payload = r#"{
            "records": [
                { "id": "rec001", "fields": { "Name": "Acme Manufacturing", "Tier": "A" } },
                { "id": "rec002", "fields": { "Name": "Borealis" } }
            ],
            "offset": "itrNEXT"
        }"#;

        let page: RecordPage<CompanyFields> = serde_json::from_str(payload).unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].id, "rec001");
        assert_eq!(page.records[0].fields.name, "Acme Manufacturing");
        assert_eq!(page.records[0].fields.tier.as_deref(), Some("A"));
        assert!(page.records[1].fields.tier.is_none());
        assert_eq!(page.offset.as_deref(), Some("itrNEXT"));
    }

    #[test]
    fn test_last_page_has_no_offset() {
        let payload = r#"{ "records": [] }"#;
        let page: RecordPage<CompanyFields> = serde_json::from_str(payload).unwrap();
        assert!(page.records.is_empty());
        assert!(page.offset.is_none());
    }
}
