use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TflServiceError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status code: {0}")]
    Status(StatusCode),

    #[error("Failed to parse response body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to fetch data from {url} after {attempts} retries: {source}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        source: Box<TflServiceError>,
    },
}
