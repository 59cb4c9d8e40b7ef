use std::env;

pub const API_TOKEN_VAR: &str = "REPLICATE_API_TOKEN";
pub const MODEL_ID_VAR: &str = "REPLICATE_MODEL";
pub const API_BASE_VAR: &str = "REPLICATE_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://api.replicate.com/v1";

/// Provider settings as seen by a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub api_token: Option<String>,
    pub model_id: Option<String>,
}

impl ProviderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        ProviderConfig {
            api_token: non_empty_var(API_TOKEN_VAR),
            model_id: non_empty_var(MODEL_ID_VAR),
        }
    }

    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}

/// Where the endpoint reads its provider settings from.
///
/// `Env` is re-read on every request so the credential and model can change
/// without restarting the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Env,
    Fixed(ProviderConfig),
}

impl ConfigSource {
    pub fn load(&self) -> ProviderConfig {
        match self {
            ConfigSource::Env => ProviderConfig::from_env(),
            ConfigSource::Fixed(config) => config.clone(),
        }
    }
}

pub fn api_base_from_env() -> String {
    non_empty_var(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
