//! JSON API routes.

pub mod collections;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/collections/{kind}",
            get(collections::list).post(collections::create),
        )
        .route(
            "/api/collections/{kind}/{id}",
            put(collections::update).delete(collections::remove),
        )
        .route(
            "/api/settings",
            get(collections::get_settings).put(collections::put_settings),
        )
}
