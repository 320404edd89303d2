use axum::Json;
use metrics::counter;
use service_core::error::ErrorResponse;
use service_core::utils::ValidatedJson;

use crate::dtos::{ContactAck, ContactForm};
use crate::models::ORII_O1;

/// Submit the contact form
///
/// The submission is acknowledged and dropped; nothing is stored or forwarded.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Submission acknowledged", body = ContactAck),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[tracing::instrument(skip(form))]
pub async fn submit_contact(ValidatedJson(form): ValidatedJson<ContactForm>) -> Json<ContactAck> {
    // Only non-identifying detail is logged.
    tracing::info!(has_company = form.company.is_some(), "Contact form accepted");
    counter!("contact_submissions_total").increment(1);

    Json(ContactAck::received(&ORII_O1))
}
