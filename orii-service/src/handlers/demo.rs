use axum::Json;
use metrics::counter;
use service_core::error::ErrorResponse;
use service_core::utils::ValidatedJson;

use crate::dtos::{DemoRequest, DemoResponse};
use crate::models::ORII_O1;

/// Request a demo completion
///
/// Returns a canned sentence quoting the prompt. No model is invoked.
#[utoipa::path(
    post,
    path = "/api/demo",
    request_body = DemoRequest,
    responses(
        (status = 200, description = "Mock completion", body = DemoResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Demo"
)]
#[tracing::instrument(skip(request), fields(max_tokens = request.max_tokens()))]
pub async fn demo_request(ValidatedJson(request): ValidatedJson<DemoRequest>) -> Json<DemoResponse> {
    let response = DemoResponse::mock(&ORII_O1, &request);

    tracing::debug!(
        prompt_chars = request.prompt().chars().count(),
        tokens_used = response.tokens_used,
        "Demo completion served"
    );
    counter!("demo_requests_total").increment(1);

    Json(response)
}
