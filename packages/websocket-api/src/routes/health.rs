use axum::http::StatusCode;

/// Health check endpoint to verify the gateway is up
pub async fn health_check() -> (StatusCode, String) {
    (StatusCode::OK, "Healthy!".to_string())
}
