use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    aggregators::{
        config::CategoryLevel,
        filters::FilterSet,
        processor_enums::{AggregatorsProcessorInput, AggregatorsProcessorOutput, MarketShareInputArgs},
        share_series::MarketShareChart,
    },
    api::{error::ApiError, response::ApiResponse, validation::validate_category_level},
    utils::app_config::AppConfig,
};

#[derive(Debug, Deserialize, Default)]
pub struct MarketShareRequest {
    #[serde(default)]
    pub filters: FilterSet,
    pub category_level: Option<u8>,
}

/// Run the aggregation pipeline through the action router
pub(crate) async fn market_share_chart(
    app_config: AppConfig,
    filters: FilterSet,
    level: CategoryLevel,
) -> Result<MarketShareChart, ApiError> {
    let action = ActionRouterInput::MarketShare(AggregatorsProcessorInput::MarketShare(
        MarketShareInputArgs {
            filters,
            category_level: Some(level),
        },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::MarketShare(AggregatorsProcessorOutput::MarketShare(chart)) => Ok(chart),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /market-share - Share series for the given filters and category level
///
/// ```json
/// { "filters": { "retailers": ["Target"] }, "category_level": 2 }
/// ```
pub async fn get_market_share(
    State(app_config): State<AppConfig>,
    payload: Result<Json<MarketShareRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MarketShareChart>>), ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))?;
    let level = validate_category_level(request.category_level)?;

    let chart = market_share_chart(app_config, request.filters, level).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(chart))))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{router, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_market_share_top_level() {
        let (status, body) = send(&router(), "POST", "/market-share", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);

        let chart = &body["data"];
        assert_eq!(chart["level"], 1);
        assert_eq!(chart["months"], json!(["2024-01", "2024-02"]));
        assert_eq!(chart["record_count"], 4);

        // January: Electronics 100 / Home 100, February: Electronics 30 / Apparel 90
        let series = chart["series"].as_array().unwrap();
        assert_eq!(series[0]["category"], "Apparel & Accessories");
        assert_eq!(series[1]["category"], "Electronics");
        assert!((series[0]["average_share"].as_f64().unwrap() - 37.5).abs() < 1e-9);
        assert!((series[1]["average_share"].as_f64().unwrap() - 37.5).abs() < 1e-9);
        assert_eq!(series[2]["category"], "Home & Garden");
        assert!((series[2]["average_share"].as_f64().unwrap() - 25.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_market_share_with_filters_and_level() {
        let body = json!({
            "filters": { "categories": ["Electronics"] },
            "category_level": 3
        });
        let (status, body) = send(&router(), "POST", "/market-share", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let chart = &body["data"];
        assert_eq!(chart["title"], "Market Share by Detailed Categories Over Time");
        let labels: Vec<&str> = chart["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["category"].as_str().unwrap())
            .collect();
        // Each owns one full month, tie broken by label
        assert_eq!(labels, vec!["Laptops", "Speakers"]);
    }

    #[tokio::test]
    async fn test_invalid_level_is_bad_request() {
        let (status, body) = send(
            &router(),
            "POST",
            "/market-share",
            Some(json!({ "category_level": 4 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_filters_matching_nothing_give_empty_series() {
        let body = json!({ "filters": { "brands": ["Nobody"] } });
        let (status, body) = send(&router(), "POST", "/market-share", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["series"], json!([]));
        assert_eq!(body["data"]["months"], json!([]));
    }
}
