use std::env;

#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    /// Bearer token required on every route but `/health` when set
    pub secret_key: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("API_SECRET_KEY").ok().filter(|k| !k.is_empty());
        if secret_key.is_none() {
            tracing::warn!("API_SECRET_KEY not set in environment, authentication disabled");
        }

        Self { secret_key }
    }
}
