use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use summary_server::config::ServerConfig;
use summary_server::dataset::DatasetStore;
use summary_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load the dataset (fail fast if unavailable)
    let dataset = DatasetStore::open(&config.dataset_path).await?;

    // Spawn background task to reload the dataset
    if let Some(period) = config.reload_interval {
        let dataset_refresh = dataset.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match dataset_refresh.reload().await {
                    Ok(info) => info!(
                        routes = info.routes,
                        stops = info.stops,
                        "reloaded dataset"
                    ),
                    Err(e) => error!("failed to reload dataset: {e}"),
                }
            }
        });
    } else {
        warn!("dataset reloading disabled");
    }

    let state = AppState::new(dataset, config.default_language.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "search-result summary server listening");
    info!("  GET  /health         - Health check");
    info!("  GET  /dataset        - Loaded dataset info");
    info!("  POST /search-result  - Summarise an itinerary");

    axum::serve(listener, app).await?;
    Ok(())
}
