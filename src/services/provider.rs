use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The input object forwarded to the hosted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderInput {
    pub prompt: String,
    pub guidance_scale: f64,
    pub num_outputs: u32,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid model identifier: {0}")]
    InvalidModel(String),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
    #[error("Prediction was canceled")]
    Canceled,
    #[error("{0}")]
    Upstream(String),
}

/// A hosted image-generation model.
///
/// `run` performs one synchronous generation and returns the model's raw
/// output, which the endpoint inspects for an image url.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn run(
        &self,
        api_token: &str,
        model_id: &str,
        input: &ProviderInput,
    ) -> Result<Value, ProviderError>;
}
