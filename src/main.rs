use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::{Settings, DEFAULT_LOG_FILTER};
use mergington::database::ActivityStore;
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::from_env();
    let store = ActivityStore::seeded();
    info!(
        activities = store.len(),
        build_id = env!("MERGINGTON_BUILD_ID"),
        static_dir = %settings.static_dir.display(),
        "starting mergington"
    );

    let app = web::router(store.into_shared(), &settings.static_dir);

    let addr: SocketAddr = settings
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", settings.bind_address()))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = settings.fallback_address().parse().with_context(|| {
                format!("invalid fallback address {}", settings.fallback_address())
            })?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("failed to bind {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(addr = %bound_addr, "listening on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
