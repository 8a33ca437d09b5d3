use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::state::AppState;

/// Host identity snapshot, built fresh on every request.
#[derive(Debug, Serialize)]
pub struct HostInfo {
    pub ip: String,
    pub name: String,
    pub user: String,
    pub version: String,
}

/// GET / - report the machine this instance runs on.
pub async fn host_info(State(st): State<AppState>) -> Result<Json<HostInfo>, ApiError> {
    let ip = st.probe.primary_ip()?;
    let name = st.probe.hostname()?;
    let user = st.probe.username()?;

    Ok(Json(HostInfo {
        ip: ip.to_string(),
        name,
        user,
        version: st.cfg.server.version.clone(),
    }))
}
