//! End-to-end tests for `POST /api/generate-image`.
//!
//! The router runs with a stub provider; the client state machine is fed the
//! real HTTP responses to check the full submit → render cycle.
#![cfg(feature = "ssr")]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use imagegen::{
    client::{interpret_response, ViewState},
    config::{ConfigSource, ProviderConfig},
    handlers::api_routes,
    services::{ImageProvider, ProviderError, ProviderInput},
    state::ApiState,
    types::DEFAULT_GUIDANCE_SCALE,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt; // for `oneshot`

/// Provider stub that records every input it is asked to run.
struct StubProvider {
    outcome: Result<Value, String>,
    calls: Mutex<Vec<ProviderInput>>,
}

impl StubProvider {
    fn returning(output: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(output),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<ProviderInput> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for StubProvider {
    async fn run(
        &self,
        _api_token: &str,
        _model_id: &str,
        input: &ProviderInput,
    ) -> Result<Value, ProviderError> {
        self.calls.lock().unwrap().push(input.clone());
        self.outcome.clone().map_err(ProviderError::Upstream)
    }
}

fn configured() -> ProviderConfig {
    ProviderConfig::new()
        .with_api_token("r8_test")
        .with_model_id("black-forest-labs/flux-schnell")
}

fn app(stub: Arc<StubProvider>, config: ProviderConfig) -> Router {
    api_routes::<ApiState>().with_state(ApiState::new(stub, ConfigSource::Fixed(config)))
}

async fn post(app: Router, body: impl Into<Body>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/generate-image")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn error_of(body: &str) -> String {
    let value: Value = serde_json::from_str(body).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_successful_generation() {
    let stub = StubProvider::returning(json!(["https://example/img.png"]));
    let (status, body) = post(
        app(stub.clone(), configured()),
        r#"{"prompt":"a lighthouse at dusk","guidance_scale":9}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "imageUrl": "https://example/img.png" })
    );
    assert_eq!(
        stub.calls(),
        vec![ProviderInput {
            prompt: "a lighthouse at dusk".to_string(),
            guidance_scale: 9.0,
            num_outputs: 1,
        }]
    );
}

#[tokio::test]
async fn test_blank_prompts_are_rejected() {
    for body in [
        r#"{"prompt":""}"#,
        r#"{"prompt":"   \n "}"#,
        r#"{"guidance_scale":4}"#,
        r#"{"prompt":7}"#,
    ] {
        let stub = StubProvider::returning(json!(["https://example/img.png"]));
        let (status, response) = post(app(stub.clone(), configured()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(error_of(&response), "Prompt is required");
        assert!(stub.calls().is_empty());
    }
}

#[tokio::test]
async fn test_blank_prompt_never_reaches_the_network() {
    let mut state = ViewState::Idle;
    assert!(state.begin("   ", DEFAULT_GUIDANCE_SCALE).is_none());
    assert_eq!(state, ViewState::Idle);
}

#[tokio::test]
async fn test_missing_api_token() {
    let config = ProviderConfig::new().with_model_id("black-forest-labs/flux-schnell");
    for body in [r#"{"prompt":"a red fox"}"#, r#"{"prompt":""}"#, r#"{"prompt":"a red"#] {
        let stub = StubProvider::returning(json!(["https://example/img.png"]));
        let (status, response) = post(app(stub.clone(), config.clone()), body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error_of(&response),
            "Server configuration error. Missing API token."
        );
        assert!(stub.calls().is_empty());
    }
}

#[tokio::test]
async fn test_missing_model_id() {
    let config = ProviderConfig::new().with_api_token("r8_test");
    for body in [r#"{"prompt":"a red fox"}"#, r#"{"prompt":"  "}"#] {
        let stub = StubProvider::returning(json!(["https://example/img.png"]));
        let (status, response) = post(app(stub, config.clone()), body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error_of(&response),
            "Server configuration error. Missing model ID."
        );
    }
}

#[tokio::test]
async fn test_token_is_checked_before_model() {
    let stub = StubProvider::returning(json!(["https://example/img.png"]));
    let (_, response) = post(app(stub, ProviderConfig::new()), r#"{"prompt":"a red fox"}"#).await;
    assert_eq!(
        error_of(&response),
        "Server configuration error. Missing API token."
    );
}

#[tokio::test]
async fn test_malformed_json() {
    for body in [r#"{"prompt":"a red"#, "", "prompt=a red fox"] {
        let stub = StubProvider::returning(json!(["https://example/img.png"]));
        let (status, response) = post(app(stub.clone(), configured()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&response), "Invalid request body");
        assert!(stub.calls().is_empty());
    }
}

#[tokio::test]
async fn test_guidance_scale_defaults_to_seven_and_a_half() {
    let stub = StubProvider::returning(json!(["https://example/img.png"]));
    let (status, _) = post(app(stub.clone(), configured()), r#"{"prompt":"a red fox"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.calls()[0].guidance_scale, 7.5);
}

#[tokio::test]
async fn test_numeric_string_guidance_is_forwarded_as_number() {
    let stub = StubProvider::returning(json!(["https://example/img.png"]));
    post(
        app(stub.clone(), configured()),
        r#"{"prompt":"a red fox","guidance_scale":"12"}"#,
    )
    .await;

    let forwarded = serde_json::to_value(&stub.calls()[0]).unwrap();
    assert_eq!(forwarded["guidance_scale"], json!(12.0));
    assert!(forwarded["guidance_scale"].is_number());
    assert_eq!(forwarded["num_outputs"], json!(1));
}

#[tokio::test]
async fn test_falsy_output_is_missing_output() {
    for output in [json!([""]), json!([null]), json!([]), Value::Null, json!({})] {
        let stub = StubProvider::returning(output.clone());
        let (status, response) = post(app(stub, configured()), r#"{"prompt":"a red fox"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{output}");
        assert_eq!(error_of(&response), "Model did not return any output");
    }
}

#[tokio::test]
async fn test_provider_error_message_is_returned() {
    let stub = StubProvider::failing("rate limited");
    let (status, response) = post(app(stub, configured()), r#"{"prompt":"a red fox"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(&response), "rate limited");
}

#[tokio::test]
async fn test_provider_error_without_message() {
    let stub = StubProvider::failing("");
    let (status, response) = post(app(stub, configured()), r#"{"prompt":"a red fox"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(&response), "An unexpected error occurred");
}

/// Runs one submission through the client state machine and the router.
async fn submit(state: &mut ViewState, app: Router, prompt: &str) -> Option<()> {
    let request = state.begin(prompt, DEFAULT_GUIDANCE_SCALE)?;
    let (status, body) = post(app, serde_json::to_string(&request).unwrap()).await;
    state.resolve(interpret_response(status.as_u16(), &body));
    Some(())
}

#[tokio::test]
async fn test_round_trip_to_success_state() {
    let stub = StubProvider::returning(json!(["https://example/img.png"]));
    let mut state = ViewState::Idle;

    submit(&mut state, app(stub.clone(), configured()), "a red fox")
        .await
        .unwrap();

    assert_eq!(
        state,
        ViewState::Success {
            image_url: "https://example/img.png".to_string(),
            prompt: "a red fox".to_string(),
        }
    );
    assert_eq!(stub.calls()[0].guidance_scale, DEFAULT_GUIDANCE_SCALE);
}

#[tokio::test]
async fn test_round_trip_provider_failure() {
    let stub = StubProvider::failing("rate limited");
    let mut state = ViewState::Idle;

    submit(&mut state, app(stub, configured()), "a red fox").await.unwrap();

    assert_eq!(state, ViewState::Error("rate limited".to_string()));
}

#[tokio::test]
async fn test_resubmit_while_loading_sends_one_request() {
    let stub = StubProvider::returning(json!(["https://example/img.png"]));
    let router = app(stub.clone(), configured());
    let mut state = ViewState::Idle;

    let first = state.begin("a red fox", DEFAULT_GUIDANCE_SCALE);
    let second = state.begin("a red fox", DEFAULT_GUIDANCE_SCALE);
    assert!(second.is_none());

    for request in [first, second].into_iter().flatten() {
        let (status, body) = post(router.clone(), serde_json::to_string(&request).unwrap()).await;
        state.resolve(interpret_response(status.as_u16(), &body));
    }

    assert_eq!(stub.calls().len(), 1);
    assert!(state.image().is_some());
}

#[tokio::test]
async fn test_new_submission_supersedes_error() {
    let failing = StubProvider::failing("rate limited");
    let working = StubProvider::returning(json!(["https://example/second.png"]));
    let mut state = ViewState::Idle;

    submit(&mut state, app(failing, configured()), "a red fox").await.unwrap();
    assert_eq!(state.error(), Some("rate limited"));

    submit(&mut state, app(working, configured()), "a red fox").await.unwrap();
    assert_eq!(state.image(), Some(("https://example/second.png", "a red fox")));
}
