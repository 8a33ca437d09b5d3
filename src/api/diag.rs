use axum::{http::StatusCode, response::IntoResponse, Json};
use std::time::Duration;
use tracing::error;

/// GET /test - liveness check. Never fails.
pub async fn liveness() -> Json<&'static str> {
    Json("test")
}

/// GET /healthz - bare liveness probe for orchestrators.
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /crash - deliberately terminate the process with exit code 3, for
/// exercising supervisory restart behavior. The response is best-effort: the
/// exit is scheduled just behind the body write.
pub async fn crash() -> Json<&'static str> {
    error!("crash requested, exiting with code 3");

    tokio::spawn(async {
        // Leave the response a moment to reach the socket.
        tokio::time::sleep(Duration::from_millis(100)).await;
        std::process::exit(3);
    });

    Json("exited")
}
