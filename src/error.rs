use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::services::ProviderError;
use crate::types::ErrorResponse;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Server configuration error. Missing API token.")]
    MissingApiToken,
    #[error("Server configuration error. Missing model ID.")]
    MissingModelId,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Prompt is required")]
    PromptRequired,
    #[error("Model did not return any output")]
    NoOutput,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl GenerateError {
    pub fn status(&self) -> StatusCode {
        match self {
            GenerateError::InvalidBody | GenerateError::PromptRequired => StatusCode::BAD_REQUEST,
            GenerateError::MissingApiToken
            | GenerateError::MissingModelId
            | GenerateError::NoOutput
            | GenerateError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client, never empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
