pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod startup;

use service_core::error::{ErrorResponse, FieldError};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Orii-O1 API", version = "1.0.0"),
    paths(
        handlers::health::health_check,
        handlers::model_info::model_info,
        handlers::contact::submit_contact,
        handlers::demo::demo_request,
    ),
    components(schemas(
        dtos::HealthStatus,
        dtos::ModelInfo,
        dtos::ContactForm,
        dtos::ContactAck,
        dtos::DemoRequest,
        dtos::DemoResponse,
        ErrorResponse,
        FieldError,
    )),
    tags(
        (name = "Status", description = "Liveness"),
        (name = "Model", description = "Model metadata"),
        (name = "Contact", description = "Contact form"),
        (name = "Demo", description = "Mock completions"),
    )
)]
pub struct ApiDoc;

/// Path prefix the `#[utoipa::path]` annotations are written against.
const DOCUMENTED_PREFIX: &str = "/api";

impl ApiDoc {
    /// The OpenAPI document with every path moved under `prefix` (already normalised).
    pub fn with_prefix(prefix: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(path, item)| {
                let route = path.strip_prefix(DOCUMENTED_PREFIX).unwrap_or(&path);
                (format!("{}{}", prefix, route), item)
            })
            .collect();
        doc
    }
}
