//! Pure JSearch REST API client.
//!
//! A minimal client for the JSearch job-search API on RapidAPI.
//! Supports paged keyword searches and returns typed job listings.
//!
//! # Example
//!
//! ```rust,ignore
//! use jsearch_client::JsearchClient;
//!
//! let client = JsearchClient::new("your-rapidapi-key".into());
//!
//! let listings = client.search_jobs("mechanical engineer minneapolis", 3).await?;
//! for listing in &listings {
//!     println!("{} — {}", listing.employer_name, listing.job_title);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{JsearchError, Result};
pub use types::{JobListing, SearchResponse};

const BASE_URL: &str = "https://jsearch.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";

pub struct JsearchClient {
    client: reqwest::Client,
    api_key: String,
}

impl JsearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetch a single result page for a query. Pages are 1-based.
    pub async fn search_page(&self, query: &str, page: u32) -> Result<Vec<JobListing>> {
        let url = format!("{}/search", BASE_URL);
        let page_param = page.to_string();
        let resp = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[
                ("query", query),
                ("page", page_param.as_str()),
                ("num_pages", "1"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(JsearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_resp: SearchResponse = resp.json().await?;
        Ok(search_resp.data)
    }

    /// Search a query end-to-end, accumulating up to `max_pages` pages.
    ///
    /// Stops early when the API returns an empty page, which is how
    /// JSearch signals that the result set is exhausted.
    pub async fn search_jobs(&self, query: &str, max_pages: u32) -> Result<Vec<JobListing>> {
        tracing::info!(query, max_pages, "Starting JSearch query");

        let mut listings = Vec::new();
        for page in 1..=max_pages.max(1) {
            let batch = self.search_page(query, page).await?;
            if batch.is_empty() {
                tracing::debug!(query, page, "Empty page, result set exhausted");
                break;
            }
            listings.extend(batch);
        }

        tracing::info!(query, count = listings.len(), "Fetched job listings");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes_from_api_payload() {
        let payload = r#"{
            "status": "OK",
            "data": [
                {
                    "employer_name": "Acme Manufacturing, Inc.",
                    "job_title": "Mechanical Engineer",
                    "job_city": "Minneapolis",
                    "job_apply_link": "https://example.com/apply/1",
                    "job_country": "US"
                },
                {
                    "employer_name": "Borealis Group",
                    "job_title": "Design Engineer"
                }
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(resp.status, "OK");
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].employer_name, "Acme Manufacturing, Inc.");
        assert_eq!(resp.data[0].job_city.as_deref(), Some("Minneapolis"));
        assert!(resp.data[1].job_city.is_none());
        assert!(resp.data[1].job_apply_link.is_none());
    }

    #[test]
    fn test_empty_data_defaults() {
        let resp: SearchResponse = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(resp.data.is_empty());
    }
}
