use axum::{body::Bytes, extract::State, Json};
use log::{debug, error, info, warn};
use serde_json::Value;

use crate::error::GenerateError;
use crate::services::ProviderInput;
use crate::state::ApiState;
use crate::types::{GenerationResponse, DEFAULT_GUIDANCE_SCALE};

/// `POST /api/generate-image`
///
/// Configuration is checked before the body is even parsed, so a server
/// without a token answers 500 no matter what the client sent.
pub async fn generate_image(
    State(api): State<ApiState>,
    body: Bytes,
) -> Result<Json<GenerationResponse>, GenerateError> {
    let config = api.config.load();

    let api_token = config.api_token.ok_or_else(|| {
        error!("Missing Replicate API token");
        GenerateError::MissingApiToken
    })?;
    let model_id = config.model_id.ok_or_else(|| {
        error!("Missing Replicate model ID");
        GenerateError::MissingModelId
    })?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejecting generate-image body: {e}");
        GenerateError::InvalidBody
    })?;

    let input = provider_input(&payload)?;

    let output = api
        .provider
        .run(&api_token, &model_id, &input)
        .await
        .map_err(|e| {
            error!("Error in generate-image route: {e}");
            GenerateError::from(e)
        })?;

    let image_url = first_output(&output).ok_or_else(|| {
        error!("Model {model_id} returned no usable output: {output}");
        GenerateError::NoOutput
    })?;

    info!("Generated image with {model_id}: {image_url}");

    Ok(Json(GenerationResponse { image_url }))
}

/// Builds the upstream input from a parsed request body.
pub fn provider_input(payload: &Value) -> Result<ProviderInput, GenerateError> {
    let prompt = payload
        .get("prompt")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            debug!("Rejecting generate-image request without a prompt");
            GenerateError::PromptRequired
        })?;

    Ok(ProviderInput {
        prompt: prompt.to_string(),
        guidance_scale: coerce_guidance_scale(payload.get("guidance_scale")),
        num_outputs: 1,
    })
}

/// Numeric coercion of the client's guidance scale. The value is not range
/// checked; the form is what keeps it inside 1..=20.
pub fn coerce_guidance_scale(value: Option<&Value>) -> f64 {
    let coerced = match value {
        None | Some(Value::Null) => return DEFAULT_GUIDANCE_SCALE,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    };

    coerced.unwrap_or_else(|| {
        warn!("Ignoring non-numeric guidance_scale {value:?}, using {DEFAULT_GUIDANCE_SCALE}");
        DEFAULT_GUIDANCE_SCALE
    })
}

/// The first output url, if the model produced one.
pub fn first_output(output: &Value) -> Option<String> {
    output
        .as_array()?
        .first()?
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
