use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code of the response.
    pub code: u16,
    pub message: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
