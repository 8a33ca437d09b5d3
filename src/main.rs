use anyhow::Result;
use hostprobe::{api, config::Config, state::AppState, telemetry};
use telemetry::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    // Connection or schema failure here is fatal: the service does not start
    // without a reachable store.
    let state = AppState::new(cfg.clone()).await?;

    let app = api::router(state);
    let addr = cfg.server.socket_addr()?;

    info!(%addr, version = %cfg.server.version, "starting hostprobe");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}
