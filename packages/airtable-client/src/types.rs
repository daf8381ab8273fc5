use serde::Deserialize;

/// A single Airtable record: opaque id plus typed fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Record<T> {
    pub id: String,
    pub fields: T,
}

/// One page of a record listing. `offset` is present whenever more
/// pages remain.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage<T> {
    pub records: Vec<Record<T>>,
    #[serde(default)]
    pub offset: Option<String>,
}
