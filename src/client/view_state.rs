use crate::types::GenerationRequest;

pub const IMAGE_LOAD_FAILED: &str = "Failed to load the generated image. Please try again.";

/// What the generator page is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        prompt: String,
    },
    Error(String),
    Success {
        image_url: String,
        prompt: String,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<(&str, &str)> {
        match self {
            ViewState::Success { image_url, prompt } => Some((image_url, prompt)),
            _ => None,
        }
    }

    /// Starts a generation and hands back the request to send.
    ///
    /// Returns `None` without touching the state when the prompt is blank or a
    /// request is already in flight, so at most one request is ever issued per
    /// page at a time.
    pub fn begin(&mut self, prompt: &str, guidance_scale: f64) -> Option<GenerationRequest> {
        if self.is_loading() || prompt.trim().is_empty() {
            return None;
        }

        *self = ViewState::Loading {
            prompt: prompt.to_string(),
        };

        Some(GenerationRequest {
            prompt: prompt.to_string(),
            guidance_scale,
        })
    }

    /// Applies the outcome of the in-flight request. Ignored unless loading.
    pub fn resolve(&mut self, outcome: Result<String, String>) {
        let ViewState::Loading { prompt } = self else {
            log::warn!("Dropping generation outcome received outside of loading state");
            return;
        };

        *self = match outcome {
            Ok(image_url) => ViewState::Success {
                image_url,
                prompt: std::mem::take(prompt),
            },
            Err(message) => ViewState::Error(message),
        };
    }

    /// The image element could not render the returned url.
    pub fn image_failed(&mut self) {
        if matches!(self, ViewState::Success { .. }) {
            *self = ViewState::Error(IMAGE_LOAD_FAILED.to_string());
        }
    }
}
