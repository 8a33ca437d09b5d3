pub mod diag;
pub mod error;
pub mod info;
pub mod load;
pub mod users;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::state::AppState;

/// Ceiling for any single request. Must stay above the fixed load window.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info::host_info))
        .route("/test", get(diag::liveness))
        .route("/crash", get(diag::crash))
        .route("/load", get(load::generate_load))
        .route("/db", get(users::list_users))
        .route("/healthz", get(diag::healthz))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(TraceLayer::new_for_http())
}
