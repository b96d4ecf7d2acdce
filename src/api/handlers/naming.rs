use axum::{Json, extract::rejection::JsonRejection};

use crate::naming::{FALLBACK_SEGMENT_NAME, GenerateNameRequest, GenerateNameResponse, generate_name};

/// POST /api/generate-profile-name - Suggest a segment name from a filter prompt
pub async fn generate_profile_name(
    payload: Result<Json<GenerateNameRequest>, JsonRejection>,
) -> Json<GenerateNameResponse> {
    let name = match payload {
        Ok(Json(request)) => generate_name(&request.prompt),
        Err(rejection) => {
            tracing::warn!("Unreadable naming request: {}", rejection);
            FALLBACK_SEGMENT_NAME.to_string()
        }
    };

    Json(GenerateNameResponse { name })
}
