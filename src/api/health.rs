use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe of the callback server.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "waiting_for_callback",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
