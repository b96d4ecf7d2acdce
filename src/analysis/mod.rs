use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::env;

pub const PLACEHOLDER_SUMMARY: &str = "Placeholder for AI analysis";

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const ANALYSIS_MODEL: &str = "gpt-4";

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("OpenAI API key is not configured")]
    MissingApiKey,
    #[error("Failed to analyze data")]
    Upstream(String),
}

#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    /// Ask the language model instead of returning the placeholder
    pub live: bool,
    pub openai_api_key: Option<String>,
}

impl AnalysisConfig {
    pub fn from_env() -> Self {
        let live = env::var("ANALYZE_LIVE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        if live && openai_api_key.is_none() {
            tracing::warn!("ANALYZE_LIVE is set but OPENAI_API_KEY is missing");
        }

        Self {
            live,
            openai_api_key,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AnalyzeRequest {
    #[serde(rename = "chartData", default)]
    pub chart_data: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub summary: String,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

pub fn analysis_prompt(chart_data: &Value) -> String {
    format!(
        "As a market analyst, provide a one-sentence summary of the key insight from this market share data: {}. Focus on the largest segments and their relative positions.",
        chart_data
    )
}

/// One-sentence summary of a market share chart
pub async fn summarize(config: &AnalysisConfig, chart_data: &Value) -> Result<String, AnalysisError> {
    if !config.live {
        return Ok(PLACEHOLDER_SUMMARY.to_string());
    }

    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or(AnalysisError::MissingApiKey)?;

    let body = json!({
        "model": ANALYSIS_MODEL,
        "messages": [{ "role": "user", "content": analysis_prompt(chart_data) }],
        "temperature": 0.5,
        "max_tokens": 100,
    });

    let response = reqwest::Client::new()
        .post(OPENAI_CHAT_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| AnalysisError::Upstream(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        tracing::error!("Analysis request failed with {}: {}", status, text);
        return Err(AnalysisError::Upstream(format!("status {}", status)));
    }

    let completion = response
        .json::<ChatCompletion>()
        .await
        .map_err(|e| AnalysisError::Upstream(e.to_string()))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| AnalysisError::Upstream("Empty completion".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_when_not_live() {
        let config = AnalysisConfig {
            live: false,
            openai_api_key: Some("sk-test".to_string()),
        };
        let summary = summarize(&config, &json!([{ "month": "2024-01" }])).await.unwrap();
        assert_eq!(summary, PLACEHOLDER_SUMMARY);
    }

    #[tokio::test]
    async fn test_live_without_key_is_error() {
        let config = AnalysisConfig {
            live: true,
            openai_api_key: None,
        };
        let err = summarize(&config, &Value::Null).await.unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));
        assert_eq!(err.to_string(), "OpenAI API key is not configured");
    }

    #[test]
    fn test_prompt_embeds_chart_data() {
        let prompt = analysis_prompt(&json!({"Electronics": 50}));
        assert!(prompt.contains(r#"{"Electronics":50}"#));
        assert!(prompt.starts_with("As a market analyst"));
    }
}
