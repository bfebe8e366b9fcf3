mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::AppError, service::syllabus::SyllabusLocks, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let auth = startup::setup_auth_gateway(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let bot = startup::setup_telegram_bot(&config, http_client);

    let state = AppState::new(db, auth, bot, SyllabusLocks::new());

    let app = server::router::router()
        .with_state(state.clone())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down identity service connections");
    state.auth.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
