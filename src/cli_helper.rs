use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::utils::app_config::AppConfig;

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config() -> Result<AppConfig> {
    AppConfig::from_env()
}

/// Execute an action through the ActionRouter
pub async fn call_action_router(
    input: ActionRouterInput,
    app_config: AppConfig,
) -> Result<ActionRouterOutput> {
    input.process(app_config).await
}

/// Ask whether a failed operation should be retried
pub fn prompt_retry(op_name: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("{} failed. Retry?", op_name))
        .default(false)
        .interact()?)
}

/// Execute an operation with retry prompt on failure
pub async fn execute_with_retry<F, Fut, T>(operation: F, op_name: &str) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("\n{}: {}\n", "Error".red(), e);
                tracing::debug!("{} failed: {:?}", op_name, e);

                if !prompt_retry(op_name)? {
                    return Err(e);
                }
            }
        }
    }
}
