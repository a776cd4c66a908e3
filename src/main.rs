use clap::Parser;
use std::net::SocketAddr;
use ting_search_web::{app, config::CliConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CliConfig::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    match app(&config) {
        Ok(router) => {
            tracing::info!("Starting server on http://{}", addr);
            if let Err(e) = axum::Server::bind(&addr)
                .serve(router.into_make_service())
                .await
            {
                tracing::error!("Could not start server: {}", e);
            }
        }
        Err(e) => {
            tracing::error!("Could not initialize application: {}", e);
        }
    }
}
