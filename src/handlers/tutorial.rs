//! Tutorial handlers: one store call each, mapped to a status and JSON body.

use crate::error::AppError;
use crate::extractors::{TutorialBody, TutorialId};
use crate::response::{collection, created, ok};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;

/// GET /tutorials, optionally filtered by `?title=` substring. An empty filter matches all.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = match params.get("title") {
        Some(fragment) => state.store.list_by_title_contains(fragment).await?,
        None => state.store.list_all().await?,
    };
    Ok(collection(rows))
}

/// GET /tutorials/published
pub async fn list_published(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_by_published(true).await?;
    Ok(collection(rows))
}

/// GET /tutorials/:id
pub async fn read(
    State(state): State<AppState>,
    TutorialId(id): TutorialId,
) -> Result<impl IntoResponse, AppError> {
    let row = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tutorial {}", id)))?;
    Ok(ok(row))
}

/// POST /tutorials
pub async fn create(
    State(state): State<AppState>,
    TutorialBody(input): TutorialBody,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create(input).await?;
    Ok(created(row))
}

/// PUT /tutorials/:id
pub async fn update(
    State(state): State<AppState>,
    TutorialId(id): TutorialId,
    TutorialBody(input): TutorialBody,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.update_by_id(id, input).await?;
    Ok(ok(row))
}

/// DELETE /tutorials/:id. A missing id is 404.
pub async fn delete(
    State(state): State<AppState>,
    TutorialId(id): TutorialId,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tutorials
pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.store.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
