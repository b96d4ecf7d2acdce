use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::api::error::ApiError;

/// JSON body holding exactly one top-level `ActionRouterInput` variant
pub struct ActionRouterExtractor(pub Value);

#[async_trait]
impl<S> FromRequest<S> for ActionRouterExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;

        match &value {
            Value::Object(obj) if obj.len() == 1 => Ok(ActionRouterExtractor(value)),
            Value::Object(_) => Err(ApiError::bad_request(
                "Request body must contain exactly one top-level enum variant",
            )),
            _ => Err(ApiError::bad_request("Request body must be a JSON object")),
        }
    }
}
