//! HTTP API consumed by the front end
//!
//! Two stateless endpoints (`GET /api/quotes`, `POST /api/generate`) and a
//! health check, assembled into one axum router.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api",
            routes::quotes::router().merge(routes::generate::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
