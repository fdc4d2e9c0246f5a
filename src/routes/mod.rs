//! Route modules for lubimyczytac-rss

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod health;
pub mod rss;

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/rss", rss::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
