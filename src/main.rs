//! Melting Snowman - word-guessing game server.

use anyhow::Result;
use axum::body::Body;
use axum::http::Request;
use clap::Parser;
use melting_snowman::{AppState, Cli, GameRegistry, WordList, router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let state = AppState::new(GameRegistry::new(), Arc::new(WordList::default()));

    // Wrap the routes with request logging
    let app = router(state).layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
        info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
        req
    }));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Melting snowman server ready");
    axum::serve(listener, app).await?;

    Ok(())
}
