use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "boxgen-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    let provisioner = state.generator.provisioner();
    let available = provisioner.is_available();

    Json(json!({
        "status": if available { "ready" } else { "not_ready" },
        "service": "boxgen-api",
        "version": env!("CARGO_PKG_VERSION"),
        "provisioner": provisioner.name(),
        "provisioner_installed": available
    }))
}
