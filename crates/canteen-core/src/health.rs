use std::fmt::Display;

use axum::http::StatusCode;

/// `GET /healthz`: the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Turn a dependency check into a readiness status, logging the failure.
pub fn readiness<E: Display>(check: Result<(), E>, dependency: &'static str) -> StatusCode {
    match check {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(dependency, error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
