use crate::{
    AppState,
    dto::{ConfigForm, SearchQuery, SortForm},
    errors::WebError,
};
use axum::{Form, extract::State, response::Redirect};
use tracing::info;

use super::{back_to_page, require_base_url};

/// POST /config
/// Form: api_base_url=...
pub async fn load_posts(
    State(state): State<AppState>,
    Form(form): Form<ConfigForm>,
) -> Redirect {
    info!("Loading posts from {}", form.api_base_url);
    state.frontend.load_posts(&form.api_base_url).await;
    back_to_page()
}

/// POST /search
/// Form: title=..&content=..&author=..&date=.. (blank filters are skipped)
pub async fn search_posts(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> Result<Redirect, WebError> {
    let base_url = require_base_url(&state)?;
    state.frontend.search_posts(&base_url, &query).await;
    Ok(back_to_page())
}

/// POST /sort
/// Form: sort=title|content|author|date&direction=asc|desc
pub async fn sort_posts(
    State(state): State<AppState>,
    Form(form): Form<SortForm>,
) -> Result<Redirect, WebError> {
    let base_url = require_base_url(&state)?;
    state
        .frontend
        .sort_posts(&base_url, form.sort, form.direction)
        .await;
    Ok(back_to_page())
}
