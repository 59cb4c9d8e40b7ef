use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::{api_base_from_env, DEFAULT_API_BASE};
use crate::services::provider::{ImageProvider, ProviderError, ProviderInput};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A model reference in `owner/name` or `owner/name:version` form.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelRef<'a> {
    Model { owner: &'a str, name: &'a str },
    Version { owner: &'a str, name: &'a str, version: &'a str },
}

pub fn parse_model_id(model_id: &str) -> Result<ModelRef<'_>, ProviderError> {
    let invalid = || ProviderError::InvalidModel(model_id.to_string());

    let (path, version) = match model_id.split_once(':') {
        Some((path, version)) => (path, Some(version)),
        None => (model_id, None),
    };
    let (owner, name) = path.split_once('/').ok_or_else(invalid)?;

    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return Err(invalid());
    }

    match version {
        None => Ok(ModelRef::Model { owner, name }),
        Some(version) if !version.is_empty() => Ok(ModelRef::Version { owner, name, version }),
        Some(_) => Err(invalid()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct PredictionUrls {
    get: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    id: Option<String>,
    status: PredictionStatus,
    #[serde(default)]
    output: Value,
    #[serde(default)]
    error: Value,
    #[serde(default)]
    urls: Option<PredictionUrls>,
}

impl Prediction {
    fn error_message(&self) -> String {
        match &self.error {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Null => "unknown error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Runs predictions against the Replicate HTTP API.
#[derive(Clone)]
pub struct ReplicateProvider {
    client: Client,
    api_base: String,
    poll_interval: Duration,
}

impl ReplicateProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn from_env() -> Self {
        Self::new(Client::new()).with_api_base(api_base_from_env())
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    async fn read_prediction(response: Response) -> Result<Prediction, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| format!("Request to Replicate failed with status {status}"));
            return Err(ProviderError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json::<Prediction>().await?)
    }
}

#[async_trait]
impl ImageProvider for ReplicateProvider {
    async fn run(
        &self,
        api_token: &str,
        model_id: &str,
        input: &ProviderInput,
    ) -> Result<Value, ProviderError> {
        let (url, body) = match parse_model_id(model_id)? {
            ModelRef::Model { owner, name } => (
                format!("{}/models/{owner}/{name}/predictions", self.api_base),
                json!({ "input": input }),
            ),
            ModelRef::Version { version, .. } => (
                format!("{}/predictions", self.api_base),
                json!({ "version": version, "input": input }),
            ),
        };

        info!("Running Replicate model {model_id}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;
        let mut prediction = Self::read_prediction(response).await?;

        loop {
            match prediction.status {
                PredictionStatus::Succeeded => return Ok(prediction.output),
                PredictionStatus::Failed => {
                    return Err(ProviderError::PredictionFailed(prediction.error_message()))
                }
                PredictionStatus::Canceled => return Err(ProviderError::Canceled),
                PredictionStatus::Starting
                | PredictionStatus::Processing
                | PredictionStatus::Unknown => {}
            }

            let Some(get_url) = prediction.urls.and_then(|u| u.get) else {
                return Err(ProviderError::Upstream(
                    "Prediction did not include a status url".to_string(),
                ));
            };

            debug!(
                "Prediction {} still {:?}, polling again",
                prediction.id.as_deref().unwrap_or("?"),
                prediction.status
            );
            tokio::time::sleep(self.poll_interval).await;

            let response = self.client.get(&get_url).bearer_auth(api_token).send().await?;
            prediction = Self::read_prediction(response).await?;
        }
    }
}
