use std::net::SocketAddr;

use bistro::config::Config;
use bistro::router;
use bistro::store::client::StoreClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env();

    // One store connection for the process lifetime; a failed connect
    // aborts startup instead of serving degraded.
    let store = StoreClient::connect(&config.store_url).await?;

    let app = router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server is running on port {}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
