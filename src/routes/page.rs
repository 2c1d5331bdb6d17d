use crate::{AppState, errors::WebError, render::PostBlock};
use askama::Template;
use axum::{extract::State, response::Html};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    base_url: &'a str,
    blocks: &'a [PostBlock],
    edit_target: Option<i64>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let base_url = state.frontend.base_url().unwrap_or_default();
    let container = state.frontend.container();
    let page = IndexTemplate {
        base_url: &base_url,
        blocks: container.blocks(),
        edit_target: state.frontend.session().target(),
    };

    Ok(Html(page.render()?))
}
