use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    analysis::{AnalysisError, AnalyzeRequest, AnalyzeResponse, summarize},
    utils::app_config::AppConfig,
};

fn failure(err: AnalysisError) -> (StatusCode, Json<Value>) {
    tracing::error!("Analysis failed: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
}

/// POST /api/analyze - One-sentence summary of the chart data
pub async fn analyze(
    State(app_config): State<AppConfig>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<Value>)> {
    let config = &app_config.analysis;

    let chart_data = match payload {
        Ok(Json(request)) => request.chart_data,
        Err(rejection) if config.live && config.openai_api_key.is_some() => {
            return Err(failure(AnalysisError::Upstream(rejection.body_text())));
        }
        Err(_) => Value::Null,
    };

    let summary = summarize(config, &chart_data).await.map_err(failure)?;

    Ok(Json(AnalyzeResponse { summary }))
}
