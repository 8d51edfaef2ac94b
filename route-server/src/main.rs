use std::net::SocketAddr;
use std::path::PathBuf;

use route_server::cache::{CacheConfig, CachedRouteFinder};
use route_server::store::{Network, seed};
use route_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let network = Network::new();

    // Optionally populate the network from a seed file
    if let Ok(path) = std::env::var("ROUTE_SEED_FILE") {
        let path = PathBuf::from(path);
        match seed::load_seed_file(&network, &path).await {
            Ok((locations, transports)) => {
                tracing::info!(locations, transports, path = %path.display(), "seeded network");
            }
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "failed to seed network");
                std::process::exit(1);
            }
        }
    }

    let finder = CachedRouteFinder::new(network.clone(), &CacheConfig::default());
    let state = AppState::new(network, finder);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    tracing::info!(%addr, "route finder listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
