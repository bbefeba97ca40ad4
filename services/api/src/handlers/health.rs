use axum::extract::State;
use axum::http::StatusCode;

use canteen_core::health::readiness;

use crate::state::AppState;

/// `GET /readyz`: 503 until the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await, "database")
}
