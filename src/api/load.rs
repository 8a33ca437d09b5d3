use axum::{extract::State, Json};
use tracing::info;

use crate::loadgen::{self, LOAD_DURATION};
use crate::state::AppState;

/// GET /load - saturate every logical core for the fixed window, then respond.
///
/// The worker count is sampled per invocation. The response fires as soon as
/// the stop signal has been broadcast; whether it also waits for the workers
/// to drain is controlled by `LOAD_WAIT_FOR_WORKERS`.
pub async fn generate_load(State(st): State<AppState>) -> Json<&'static str> {
    let workers = loadgen::logical_cpus();
    info!(workers, "starting load run");

    let report = loadgen::run_load(workers, LOAD_DURATION, st.cfg.load.wait_for_workers).await;

    info!(
        workers = report.workers,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "load run complete"
    );
    Json("done")
}
