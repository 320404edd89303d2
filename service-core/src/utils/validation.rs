use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that runs `validator` constraints before the handler sees the value.
///
/// The body is parsed as JSON whatever its `Content-Type`. Parse failures and constraint
/// violations are both rejected with 422 and the shared error body.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            AppError::InvalidBody(format!("Failed to parse the request body as JSON: {}", e))
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
