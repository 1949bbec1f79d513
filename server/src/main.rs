mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if config.blob.is_none() {
        tracing::warn!("blob storage not configured; uploads disabled");
    }

    let state = state::AppState::from_config(&config).expect("blob store init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, upload_max_bytes = config.upload_max_bytes, "tutorme-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
