use thiserror::Error;

pub type Result<T> = std::result::Result<T, JsearchError>;

#[derive(Debug, Error)]
pub enum JsearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSearch API error {status}: {message}")]
    Api { status: u16, message: String },
}
