//! Route definitions for the Assistant Agricole server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create the application routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Assistant page (render + submit)
        .route(
            "/",
            get(handlers::show_page).post(handlers::submit_message),
        )
        // Health check
        .route("/health", get(handlers::health_check))
}
