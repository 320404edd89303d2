use axum::Json;

use crate::dtos::ModelInfo;
use crate::models::ORII_O1;

/// Describe the Orii-O1 model
#[utoipa::path(
    get,
    path = "/api/model-info",
    responses(
        (status = 200, description = "Model name, capabilities and specifications", body = ModelInfo)
    ),
    tag = "Model"
)]
pub async fn model_info() -> Json<ModelInfo> {
    Json(ModelInfo::from(&ORII_O1))
}
