mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // `.env` is optional; real deployments set the variables directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    tracing::info!(
        keycloak_url = %config.portal.keycloak_url,
        realm = %config.portal.realm,
        client_id = %config.portal.client_id,
        game_base_url = %config.portal.game_base_url,
        "portal configuration loaded"
    );

    let port = config.port;
    let state = state::AppState::new(config);
    let app = routes::app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "link-wars portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
