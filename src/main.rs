use dotenvy::dotenv;
use std::env;

use market_share_dashboard::api::{build_router, config::ApiConfig};
use market_share_dashboard::cli_helper::init_tracing;
use market_share_dashboard::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    init_tracing();

    // Load API configuration
    let api_config = ApiConfig::from_env();
    tracing::info!("API configuration loaded successfully");

    // Load the source table and segment store
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        "Application configuration loaded successfully ({} transactions)",
        app_config.transactions.len()
    );

    let router = build_router(app_config, &api_config);

    // Get port from environment or use default
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(6969);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting market share API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
