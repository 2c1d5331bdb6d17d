// ============================================================================
// BLOG FRONTEND - server-rendered UI for a remote blog-post API
// ============================================================================

use blog_frontend::{
    AppState,
    client::HttpPostsApi,
    config_store::{ConfigStore, JsonFileStore},
    routes,
    settings::Settings,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    let mut store = match JsonFileStore::open(&settings.store_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Could not open {}: {}", settings.store_path, e);
            std::process::exit(1);
        }
    };
    if store.get().is_none() {
        if let Some(url) = &settings.default_api_base_url {
            if let Err(e) = store.set(url) {
                error!("Could not save default API base URL: {}", e);
            }
        }
    }

    // Create application state
    let state = AppState::new(HttpPostsApi::default(), Box::new(store));
    state.frontend.bootstrap().await;

    let app = routes::router(state);

    // Start server
    let listener = match tokio::net::TcpListener::bind(&settings.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Could not bind {}: {}", settings.listen_addr, e);
            std::process::exit(1);
        }
    };

    info!("UI running on http://{}", settings.listen_addr);
    info!("Config store: {}", settings.store_path);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}
