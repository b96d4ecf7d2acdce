use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{api::response::ApiResponse, utils::app_config::AppConfig};

/// GET /health - Liveness plus the size of the loaded table
pub async fn health(State(app_config): State<AppConfig>) -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(json!({
        "status": "ok",
        "transactions": app_config.transactions.len(),
    })))
}
