use std::{path::Path, time::Duration};

use validator::{Validate, ValidationErrors};

use crate::services::tfl_client::tfl_service::{RetryConfig, TflServiceConfig};

pub const TFL_STOP_POINTS_URL: &str = "https://api.tfl.gov.uk/StopPoint/Mode/tube";
pub const STATION_INFO_PATH: &str = "data/station_info.xlsx";

#[derive(Clone, Debug, Validate)]
pub struct AppConfig {
    #[validate(url(message = "Must be a valid URL"))]
    pub stop_points_url: String,
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub output_path: String,
    #[validate(range(min = 1, message = "Must allow at least one attempt"))]
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let retry = RetryConfig::default();

        AppConfig {
            stop_points_url: TFL_STOP_POINTS_URL.to_string(),
            output_path: STATION_INFO_PATH.to_string(),
            max_retries: retry.max_retries,
            retry_delay: retry.retry_delay,
            request_timeout: retry.request_timeout,
        }
    }
}

impl AppConfig {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        self.validate().map(|_| self)
    }

    pub fn output_path(&self) -> &Path {
        Path::new(&self.output_path)
    }

    pub fn tfl_service_config(&self) -> TflServiceConfig {
        TflServiceConfig {
            stop_points_url: self.stop_points_url.clone(),
            retry: RetryConfig {
                max_retries: self.max_retries,
                retry_delay: self.retry_delay,
                request_timeout: self.request_timeout,
            },
        }
    }
}
