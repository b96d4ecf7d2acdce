use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    action_router::ActionRouterInput,
    api::{error::ApiError, extractors::ActionRouterExtractor, response::ApiResponse},
    utils::app_config::AppConfig,
};

/// POST /process - Generic action endpoint
/// Accepts ActionRouterInput enum in nested JSON format
///
/// Expected JSON structure:
/// { "Segments": { "Get": "..." } }
/// or any other valid ActionRouterInput variant
pub async fn process_mutation(
    State(app_config): State<AppConfig>,
    ActionRouterExtractor(payload): ActionRouterExtractor,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let action_input: ActionRouterInput = serde_json::from_value(payload).map_err(|e| {
        ApiError::bad_request(format!(
            "Failed to deserialize request into valid action: {}",
            e
        ))
    })?;

    let result = action_input.process(app_config).await?;

    let result_json = serde_json::to_value(&result)
        .map_err(|e| ApiError::internal_error(format!("Failed to serialize response: {}", e)))?;

    Ok(Json(ApiResponse::success(result_json)))
}
