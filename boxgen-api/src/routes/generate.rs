use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::post,
    Router,
};
use boxgen_provider::BoxDescriptor;
use tracing::{error, info, info_span, warn};

pub const SUCCESS_MESSAGE: &str = "Provisioning started successfully";

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/generate",
        post(generate_box)
            .fallback(method_not_allowed)
            // Descriptors are accepted at any size
            .layer(DefaultBodyLimit::disable()),
    )
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// The body is parsed by hand so that every malformed payload is a 400,
/// whatever its `Content-Type` and whether it fails on syntax or shape.
async fn generate_box(State(state): State<AppState>, body: Bytes) -> ApiResult<&'static str> {
    let descriptor: BoxDescriptor = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "rejecting generate request");
        ApiError::BadRequest("Invalid JSON payload".to_string())
    })?;

    let span = info_span!(
        "generate",
        hostname = %descriptor.hostname,
        box_name = %descriptor.name
    );
    let generator = state.generator.clone();

    // vagrant up blocks for as long as the VM takes to boot
    tokio::task::spawn_blocking(move || {
        let _enter = span.enter();
        generator.generate(&descriptor)
    })
    .await
    .map_err(|e| {
        error!(error = %e, "generate task panicked");
        ApiError::Internal("Failed to start provisioning".to_string())
    })??;

    info!("box provisioned");
    Ok(SUCCESS_MESSAGE)
}
