use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::types::{GenerationRequest, GENERATE_IMAGE_PATH};

pub const REQUEST_FAILED: &str = "Failed to generate image";
pub const MISSING_IMAGE_URL: &str = "No image URL returned from API";
pub const GENERIC_FAILURE: &str = "An error occurred while generating the image";

/// Posts the request to the generation endpoint from the browser.
///
/// Every failure, including the fetch promise rejecting, comes back as the
/// message the page should display.
pub async fn request_image(request: &GenerationRequest) -> Result<String, String> {
    let body = serde_json::to_string(request).map_err(|e| failure_message(&e.to_string()))?;

    let (status, text) = post_json(GENERATE_IMAGE_PATH, &body).await.map_err(|e| {
        log::error!("Error generating image: {e:?}");
        js_error_message(&e)
    })?;

    interpret_response(status, &text).inspect_err(|message| {
        log::error!("Error generating image: {message}");
    })
}

async fn post_json(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;

    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// Maps an endpoint response onto either the image url or a display message.
pub fn interpret_response(status: u16, body: &str) -> Result<String, String> {
    let parsed = serde_json::from_str::<Value>(body);

    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| REQUEST_FAILED.to_string());
        return Err(message);
    }

    let value = parsed.map_err(|e| failure_message(&e.to_string()))?;
    match value.get("imageUrl").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(MISSING_IMAGE_URL.to_string()),
    }
}

/// Message shown when the request itself could not complete.
pub fn failure_message(detail: &str) -> String {
    if detail.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        detail.to_string()
    }
}

fn js_error_message(value: &JsValue) -> String {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default();
    failure_message(&detail)
}
