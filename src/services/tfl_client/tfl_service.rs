use std::time::Duration;

use serde_json::Value;
use tokio::time::sleep;
use tracing::{error, info, warn};
use urlencoding::encode;

use super::types::tfl_service_error::TflServiceError;

#[derive(Clone, Debug)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct TflServiceConfig {
    pub stop_points_url: String,
    pub retry: RetryConfig,
}

#[derive(Clone)]
pub struct TflService {
    config: TflServiceConfig,
    client: reqwest::Client,
}

impl TflService {
    pub fn new(config: TflServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_stop_points(&self) -> Result<Value, TflServiceError> {
        query_tfl(
            &self.config.stop_points_url,
            None,
            &self.config.retry,
            Some(&self.client),
        )
        .await
    }
}

/// Queries a TfL endpoint and returns the parsed JSON body.
///
/// Network failures, non-success statuses and malformed JSON are retried up to
/// `retry.max_retries` attempts in total, sleeping `retry.retry_delay` between
/// attempts. An empty body yields an empty JSON list. When `session` is `None`
/// a client is created for this call only. With `max_retries` of 0 no request
/// is made and an empty list is returned.
pub async fn query_tfl(
    url: &str,
    params: Option<&[(&str, &str)]>,
    retry: &RetryConfig,
    session: Option<&reqwest::Client>,
) -> Result<Value, TflServiceError> {
    if retry.max_retries == 0 {
        warn!(url, "max_retries is 0, skipping request");
        return Ok(Value::Array(Vec::new()));
    }

    let ephemeral;
    let client = match session {
        Some(client) => client,
        None => {
            ephemeral = reqwest::Client::new();
            &ephemeral
        }
    };

    let request_url = with_query(url, params);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match get_json(client, &request_url, retry.request_timeout).await {
            Ok(value) => {
                info!(url = %request_url, attempt, "Fetched TfL response");
                return Ok(value);
            }
            Err(e) if attempt < retry.max_retries => {
                warn!(
                    url = %request_url,
                    attempt,
                    max_retries = retry.max_retries,
                    error = %e,
                    "Error querying TfL API, retrying"
                );
                sleep(retry.retry_delay).await;
            }
            Err(e) => {
                error!(url = %request_url, attempt, error = %e, "Exhausted retries");
                return Err(TflServiceError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    source: Box::new(e),
                });
            }
        }
    }
}

async fn get_json(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Value, TflServiceError> {
    let resp = client.get(url).timeout(timeout).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(TflServiceError::Status(status));
    }

    let body = resp.text().await?;

    parse_body(&body)
}

fn parse_body(body: &str) -> Result<Value, TflServiceError> {
    if body.trim().is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    let value: Value = serde_json::from_str(body)?;

    if is_empty_value(&value) {
        return Ok(Value::Array(Vec::new()));
    }

    Ok(value)
}

// null, [], {}, "", false and 0 all count as "nothing returned"
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn with_query(url: &str, params: Option<&[(&str, &str)]>) -> String {
    let params = match params {
        Some(params) if !params.is_empty() => params,
        _ => return url.to_string(),
    };

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<String>>()
        .join("&");

    let separator = if url.contains('?') { '&' } else { '?' };

    format!("{}{}{}", url, separator, query)
}
