use std::net::SocketAddr;
use std::sync::Arc;

use skydesk_api::{app, AppState};
use skydesk_store::{Config, HttpFlightsApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skydesk_api=debug,skydesk_store=debug,skydesk_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting SkyDesk on port {}", config.server.port);

    let api = HttpFlightsApi::from_config(&config.upstream)?;
    tracing::info!("Upstream flight API: {}", api.base_url());

    let app_state = AppState {
        api: Arc::new(api),
        display: config.display.options()?,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;
    Ok(())
}
