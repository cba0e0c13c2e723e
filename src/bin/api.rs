use anyhow::{Context, Result};
use passage::{api, app_state::AppState, config::Config, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format());

    let state = AppState::from_config(&config).context("failed to build upstream client")?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!(
        addr = %config.bind_addr(),
        upstream = %config.upstream_base_url(),
        "passage API listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
