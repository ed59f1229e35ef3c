use anyhow::Context;

use materials_api::{ApiConfig, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    materials_observability::init();

    let config = ApiConfig::from_env()?;
    let router = app::build_app(app::services::build_services());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
