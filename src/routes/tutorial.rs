//! Tutorial CRUD routes. Nested under `/api` by [`crate::app::build_app`].

use crate::handlers::tutorial::{create, delete, delete_all, list, list_published, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn tutorial_routes(state: AppState) -> Router {
    Router::new()
        .route("/tutorials", get(list).post(create).delete(delete_all))
        .route("/tutorials/published", get(list_published))
        .route("/tutorials/:id", get(read).put(update).delete(delete))
        .with_state(state)
}
