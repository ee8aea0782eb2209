mod lookup;
mod problem;
mod router;
mod telemetry;

use std::net::SocketAddr;

use emojump_core::Dictionary;
use emojump_util::{load_env_file, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;
    let metrics = if config.metrics_enabled {
        Some(telemetry::init_metrics()?)
    } else {
        None
    };

    let state = router::AppState::new(metrics);

    let addr: SocketAddr = config.bind_addr;
    info!(
        stage = "app",
        %addr,
        env = %config.environment.as_str(),
        metrics = config.metrics_enabled,
        dictionaries = Dictionary::all().len(),
        "starting dictionary server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router::app_router(state))
        .await
        .map_err(|err| err.into())
}
