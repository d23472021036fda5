//! Affinyx Web Server
//!
//! Run with: cargo run -p affinyx-web

use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use affinyx_predict::Predictor;
use affinyx_web::config::ServerConfig;
use affinyx_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Affinyx prediction server...");

    let config = ServerConfig::from_env();

    // Create app state — the predictor is built once and shared
    let state = AppState::new(Predictor::new(), config.prediction_timeout);

    // Build router
    let app = affinyx_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
