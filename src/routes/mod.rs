mod health;
mod listing;
mod page;
mod post;

use crate::{AppState, errors::WebError};
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Builds the router serving the page and its form actions.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health_check))
        .route("/config", post(listing::load_posts))
        .route("/search", post(listing::search_posts))
        .route("/sort", post(listing::sort_posts))
        .route("/posts", post(post::add_post))
        .route("/posts/{id}/delete", post(post::delete_post))
        .route("/posts/{id}/edit", post(post::open_edit))
        .route("/edit", post(post::confirm_edit))
        .route("/edit/cancel", post(post::cancel_edit))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> WebError {
    WebError::NotFound
}

// Every action re-renders the whole page, like a reload.
fn back_to_page() -> Redirect {
    Redirect::to("/")
}

fn require_base_url(state: &AppState) -> Result<String, WebError> {
    state
        .frontend
        .base_url()
        .ok_or_else(|| WebError::BadRequest("No API base URL configured".into()))
}
