use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::RecordId;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
