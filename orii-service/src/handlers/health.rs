use axum::Json;

use crate::dtos::HealthStatus;
use crate::models::ORII_O1;

/// Service health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Status"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy(&ORII_O1))
}
