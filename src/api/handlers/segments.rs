use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    aggregators::share_series::MarketShareChart,
    api::{
        error::ApiError,
        handlers::market_share::market_share_chart,
        response::ApiResponse,
        validation::{validate_category_level, validate_not_empty},
    },
    segments::{
        db_types::{Segment, SegmentInputArgs},
        processor_enums::{SegmentsProcessorInput, SegmentsProcessorOutput, UpdateSegmentInputArgs},
    },
    utils::app_config::AppConfig,
};

#[derive(Debug, Deserialize)]
pub struct ApplySegmentParams {
    pub category_level: Option<u8>,
}

async fn run_segments(
    app_config: AppConfig,
    input: SegmentsProcessorInput,
) -> Result<SegmentsProcessorOutput, ApiError> {
    match ActionRouterInput::Segments(input).process(app_config).await? {
        ActionRouterOutput::Segments(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

fn segment_body(
    payload: Result<Json<SegmentInputArgs>, JsonRejection>,
) -> Result<SegmentInputArgs, ApiError> {
    let Json(input) =
        payload.map_err(|e| ApiError::bad_request(format!("Invalid segment body: {}", e)))?;
    validate_not_empty(&input.name, "Segment name")?;
    Ok(input)
}

/// GET /segments - All saved segments in creation order
pub async fn list_segments(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Segment>>>), ApiError> {
    match run_segments(app_config, SegmentsProcessorInput::List).await? {
        SegmentsProcessorOutput::List(segments) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(segments))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /segments - Save the current filters under a name
pub async fn create_segment(
    State(app_config): State<AppConfig>,
    payload: Result<Json<SegmentInputArgs>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Segment>>), ApiError> {
    let input = segment_body(payload)?;

    match run_segments(app_config, SegmentsProcessorInput::Create(input)).await? {
        SegmentsProcessorOutput::Create(segment) => {
            Ok((StatusCode::CREATED, Json(ApiResponse::success(segment))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /segments/{id}
pub async fn get_segment_by_id(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Segment>>), ApiError> {
    match run_segments(app_config, SegmentsProcessorInput::Get(id)).await? {
        SegmentsProcessorOutput::Get(segment) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(segment))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /segments/{id} - Replace name and filters, keeping the id
pub async fn update_segment(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    payload: Result<Json<SegmentInputArgs>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Segment>>), ApiError> {
    let segment = segment_body(payload)?;
    let input = SegmentsProcessorInput::Update(UpdateSegmentInputArgs {
        segment_id: id,
        segment,
    });

    match run_segments(app_config, input).await? {
        SegmentsProcessorOutput::Update(segment) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(segment))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /segments/{id}
pub async fn delete_segment(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), ApiError> {
    match run_segments(app_config, SegmentsProcessorInput::Delete(id)).await? {
        SegmentsProcessorOutput::Delete => Ok((StatusCode::OK, Json(ApiResponse::success(Value::Null)))),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /segments/{id}/apply?category_level= - Market share for the segment's filters
pub async fn apply_segment(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    Query(params): Query<ApplySegmentParams>,
) -> Result<(StatusCode, Json<ApiResponse<MarketShareChart>>), ApiError> {
    let level = validate_category_level(params.category_level)?;

    let filters = match run_segments(app_config.clone(), SegmentsProcessorInput::Apply(id)).await? {
        SegmentsProcessorOutput::Apply(filters) => filters,
        _ => return Err(ApiError::internal_error("Unexpected response type")),
    };

    let chart = market_share_chart(app_config, filters, level).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(chart))))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{router, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_segment_crud() {
        let router = router();

        let (status, body) = send(
            &router,
            "POST",
            "/segments",
            Some(json!({
                "name": "Target Shoppers",
                "filters": { "retailers": ["Target"] }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&router, "GET", &format!("/segments/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Target Shoppers");

        let (status, body) = send(
            &router,
            "PUT",
            &format!("/segments/{}", id),
            Some(json!({ "name": "Target Only", "filters": { "retailers": ["Target"] } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id.as_str());
        assert_eq!(body["data"]["name"], "Target Only");

        let (status, body) = send(&router, "GET", "/segments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, _) = send(&router, "DELETE", &format!("/segments/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&router, "GET", &format!("/segments/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let (status, body) =
            send(&router(), "POST", "/segments", Some(json!({ "name": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Segment name cannot be empty");
    }

    #[tokio::test]
    async fn test_apply_segment_runs_market_share() {
        let router = router();
        let (_, body) = send(
            &router,
            "POST",
            "/segments",
            Some(json!({
                "name": "Target",
                "filters": {
                    "categories": [{ "name": "Electronics", "path": ["Electronics"] }],
                    "retailers": ["Target"]
                }
            })),
        )
        .await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &router,
            "POST",
            &format!("/segments/{}/apply?category_level=2", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["record_count"], 1);
        assert_eq!(body["data"]["series"][0]["category"], "Audio");
        assert_eq!(body["data"]["series"][0]["average_share"], 100.0);
    }

    #[tokio::test]
    async fn test_apply_unknown_segment_is_not_found() {
        let (status, _) = send(&router(), "POST", "/segments/missing/apply", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
