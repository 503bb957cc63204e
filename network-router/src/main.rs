use network_router::config::ServerConfig;
use network_router::loader::NetworkData;
use network_router::network::Network;
use network_router::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    // Load the network (fail fast if the document is unusable)
    let network = match &config.network_data {
        Some(path) => match NetworkData::from_path(path) {
            Ok(data) => data.into_network(),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        None => {
            warn!("NETWORK_DATA not set, serving an empty network");
            Network::default()
        }
    };

    let state = AppState::new(network);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "network router listening");
    info!("  GET /health             - Health check");
    info!("  GET /route?from=&to=    - Plan a route");
    info!("  GET /stations/:name     - Station and its connections");
    info!("  GET /lines              - Line names");
    info!("  GET /lines/:name        - Line metadata");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
