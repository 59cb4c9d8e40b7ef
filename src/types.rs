use serde::{Deserialize, Serialize};

pub const GENERATE_IMAGE_PATH: &str = "/api/generate-image";
pub const DEFAULT_GUIDANCE_SCALE: f64 = 7.5;
pub const MIN_GUIDANCE_SCALE: f64 = 1.0;
pub const MAX_GUIDANCE_SCALE: f64 = 20.0;

// for client -> server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub guidance_scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Keeps a slider value inside the range the form offers.
pub fn clamp_guidance_scale(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_GUIDANCE_SCALE;
    }
    value.clamp(MIN_GUIDANCE_SCALE, MAX_GUIDANCE_SCALE)
}
