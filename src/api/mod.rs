pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod validation;

use axum::{
    Router,
    extract::Request,
    middleware::{self as axum_middleware, Next},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::utils::app_config::AppConfig;
use config::ApiConfig;
use handlers::{analysis, catalog, health, market_share, mutation, naming, segments};
use middleware::auth::require_bearer;

/// All routes with tracing, CORS and, when a secret is configured, bearer auth
pub fn build_router(app_config: AppConfig, api_config: &ApiConfig) -> Router {
    let mut router = Router::new()
        // Health check - public endpoint
        .route("/health", get(health::health))
        // Mutation endpoint
        .route("/process", post(mutation::process_mutation))
        // Market share
        .route("/market-share", post(market_share::get_market_share))
        // Catalog
        .route("/filters/options", get(catalog::get_filter_options))
        .route("/categories/search", get(catalog::search_categories))
        // Segments
        .route(
            "/segments",
            get(segments::list_segments).post(segments::create_segment),
        )
        .route(
            "/segments/:id",
            get(segments::get_segment_by_id)
                .put(segments::update_segment)
                .delete(segments::delete_segment),
        )
        .route("/segments/:id/apply", post(segments::apply_segment))
        // Dashboard helpers
        .route(
            "/api/generate-profile-name",
            post(naming::generate_profile_name),
        )
        .route("/api/analyze", post(analysis::analyze));

    if let Some(secret_key) = api_config.secret_key.clone() {
        router = router.layer(axum_middleware::from_fn(move |req: Request, next: Next| {
            let secret = secret_key.clone();
            async move { require_bearer(secret, req, next).await }
        }));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn secured() -> Router {
        let api_config = ApiConfig {
            secret_key: Some("s3cret".to_string()),
        };
        build_router(test_support::app_config(), &api_config)
    }

    async fn status_of(router: Router, uri: &str, token: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let response = router.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        assert_eq!(status_of(secured(), "/health", None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_routes_require_token() {
        assert_eq!(
            status_of(secured(), "/segments", None).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(secured(), "/segments", Some("wrong")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(secured(), "/segments", Some("s3cret")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_no_secret_means_open_routes() {
        assert_eq!(
            status_of(test_support::router(), "/filters/options", None).await,
            StatusCode::OK
        );
    }
}
