use thiserror::Error;
use validator::ValidationErrors;

use crate::services::tfl_client::types::tfl_service_error::TflServiceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationErrors),

    #[error(transparent)]
    Fetch(#[from] TflServiceError),
}
