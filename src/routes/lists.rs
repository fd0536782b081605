//! List item routes: `/lists` and `/lists/:id`.

use crate::handlers::lists::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn list_routes(state: AppState) -> Router {
    Router::new()
        .route("/lists", get(list).post(create))
        .route("/lists/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
