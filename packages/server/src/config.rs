use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Search queries issued on every run when SEARCH_QUERIES is not set.
const DEFAULT_SEARCH_QUERIES: &[&str] = &[
    "mechanical engineer in Minneapolis, MN",
    "mechanical design engineer in Minneapolis, MN",
    "product design engineer in Minneapolis, MN",
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub rapidapi_key: String,
    pub airtable_api_key: String,
    pub airtable_base_id: String,
    pub airtable_table: String,
    pub search_queries: Vec<String>,
    pub jsearch_pages: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let search_queries = match env::var("SEARCH_QUERIES") {
            Ok(raw) => raw
                .split(',')
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty())
                .collect(),
            Err(_) => DEFAULT_SEARCH_QUERIES
                .iter()
                .map(|q| q.to_string())
                .collect(),
        };

        Ok(Self {
            rapidapi_key: env::var("RAPIDAPI_KEY")
                .context("RAPIDAPI_KEY must be set")?,
            airtable_api_key: env::var("AIRTABLE_API_KEY")
                .context("AIRTABLE_API_KEY must be set")?,
            airtable_base_id: env::var("AIRTABLE_BASE_ID")
                .context("AIRTABLE_BASE_ID must be set")?,
            airtable_table: env::var("AIRTABLE_TABLE")
                .unwrap_or_else(|_| "Companies".to_string()),
            search_queries,
            jsearch_pages: env::var("JSEARCH_PAGES")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("JSEARCH_PAGES must be a valid number")?,
        })
    }
}
