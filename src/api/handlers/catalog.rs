use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, response::ApiResponse},
    catalog::{
        db_types::{CategorySearchResult, FilterOptions},
        processor_enums::{CatalogProcessorInput, CatalogProcessorOutput},
    },
    utils::app_config::AppConfig,
};

#[derive(Debug, Deserialize)]
pub struct CategorySearchParams {
    #[serde(default)]
    pub term: String,
}

async fn run_catalog(
    app_config: AppConfig,
    input: CatalogProcessorInput,
) -> Result<CatalogProcessorOutput, ApiError> {
    match ActionRouterInput::Catalog(input).process(app_config).await? {
        ActionRouterOutput::Catalog(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /filters/options - Selectable values for every filter
pub async fn get_filter_options(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<ApiResponse<FilterOptions>>), ApiError> {
    match run_catalog(app_config, CatalogProcessorInput::FilterOptions).await? {
        CatalogProcessorOutput::FilterOptions(options) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(options))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /categories/search?term= - Matching category paths and the nodes to expand
pub async fn search_categories(
    State(app_config): State<AppConfig>,
    Query(params): Query<CategorySearchParams>,
) -> Result<(StatusCode, Json<ApiResponse<CategorySearchResult>>), ApiError> {
    match run_catalog(app_config, CatalogProcessorInput::SearchCategories(params.term)).await? {
        CatalogProcessorOutput::SearchCategories(result) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(result))))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{router, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_filter_options() {
        let (status, body) = send(&router(), "GET", "/filters/options", None).await;
        assert_eq!(status, StatusCode::OK);

        let options = &body["data"];
        assert_eq!(options["retailers"], json!(["Best Buy", "Dicks", "Target"]));
        assert_eq!(options["genders"], json!(["Female", "Male"]));
        let roots: Vec<&str> = options["categories"]["roots"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["name"].as_str().unwrap())
            .collect();
        assert_eq!(roots, vec!["Apparel & Accessories", "Electronics", "Home & Garden"]);
    }

    #[tokio::test]
    async fn test_category_search() {
        let (status, body) =
            send(&router(), "GET", "/categories/search?term=speak", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["matches"],
            json!([["Electronics", "Audio", "Speakers"]])
        );
        assert_eq!(body["data"]["expanded"], json!(["Electronics", "Electronics.Audio"]));
    }
}
