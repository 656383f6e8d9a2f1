use anyhow::Context;
use menu_service_rust::config::load_settings;
use menu_service_rust::menu::AppState;
use menu_service_rust::router::create_app_router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    // Initialize application state
    let state = if settings.seed_sample_menu {
        AppState::seeded()
    } else {
        AppState::new()
    };
    let dishes = state.menu.read().await.len();
    info!(dishes, "menu ready");

    // Build application router with all routes and middleware
    let app = create_app_router(Arc::new(state));

    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
