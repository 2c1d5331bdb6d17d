use crate::{AppState, dto::PostDraft, edit_session::EditDraft, errors::WebError};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use super::{back_to_page, require_base_url};

/// POST /posts
/// Form: title=..&content=..&author=.. (the date is filled in by the client)
pub async fn add_post(
    State(state): State<AppState>,
    Form(draft): Form<PostDraft>,
) -> Result<Redirect, WebError> {
    let base_url = require_base_url(&state)?;
    state.frontend.add_post(&base_url, draft).await;
    Ok(back_to_page())
}

/// POST /posts/{id}/delete
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    let base_url = require_base_url(&state)?;
    state.frontend.delete_post(&base_url, id).await;
    Ok(back_to_page())
}

/// POST /posts/{id}/edit
/// Opens the edit modal for the post.
pub async fn open_edit(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.frontend.open_edit(id);
    back_to_page()
}

/// POST /edit
/// Form: title=..&content=..&author=..&date=.. (blank = unchanged)
pub async fn confirm_edit(
    State(state): State<AppState>,
    Form(draft): Form<EditDraft>,
) -> Result<Redirect, WebError> {
    state.frontend.update_draft(draft);
    // The modal closes on submit even if the update cannot be sent.
    let confirmed = state.frontend.take_edit();
    let base_url = require_base_url(&state)?;
    if let Some((post_id, patch)) = confirmed {
        state.frontend.submit_edit(&base_url, post_id, &patch).await;
    }
    Ok(back_to_page())
}

/// POST /edit/cancel
pub async fn cancel_edit(State(state): State<AppState>) -> Redirect {
    state.frontend.cancel_edit();
    back_to_page()
}
