pub mod generate;

pub use generate::generate_image;

use axum::{extract::FromRef, middleware, routing::post, Router};

use crate::middleware::tracing::trace_requests;
use crate::state::ApiState;
use crate::types::GENERATE_IMAGE_PATH;

/// JSON API routes, mountable on any router whose state can hand out an
/// [`ApiState`].
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new()
        .route(GENERATE_IMAGE_PATH, post(generate_image))
        .layer(middleware::from_fn(trace_requests))
}
