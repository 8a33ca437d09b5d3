use axum::{extract::State, Json};

use crate::api::error::ApiError;
use crate::state::AppState;
use crate::store::UserRecord;

/// GET /db - list every user record. Zero rows yields an empty array; a query
/// failure is scoped to this request and answered with a 500.
pub async fn list_users(State(st): State<AppState>) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = st.store.list_users().await?;
    Ok(Json(users))
}
