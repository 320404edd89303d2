//! HTTP handlers for the Orii-O1 API.

pub mod contact;
pub mod demo;
pub mod health;
pub mod metrics;
pub mod model_info;

pub use contact::submit_contact;
pub use demo::demo_request;
pub use health::health_check;
pub use self::metrics::metrics_endpoint;
pub use model_info::model_info;

use axum::{extract::OriginalUri, Extension, Json};
use service_core::error::AppError;
use std::sync::Arc;
use utoipa::openapi::OpenApi;

/// OpenAPI document for the JSON API, with paths under the configured prefix.
pub async fn openapi_spec(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
